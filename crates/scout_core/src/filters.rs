/// Default page size when none was chosen.
pub const DEFAULT_PER_PAGE: u32 = 10;

/// Page sizes the UI offers; anything else is ignored on merge.
pub const PER_PAGE_CHOICES: [u32; 4] = [10, 25, 50, 100];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Stars,
    Forks,
    Updated,
}

impl SortKey {
    pub fn as_param(&self) -> &'static str {
        match self {
            SortKey::Stars => "stars",
            SortKey::Forks => "forks",
            SortKey::Updated => "updated",
        }
    }

    pub fn from_param(value: &str) -> Option<Self> {
        match value {
            "stars" => Some(SortKey::Stars),
            "forks" => Some(SortKey::Forks),
            "updated" => Some(SortKey::Updated),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Descending,
    Ascending,
}

impl SortOrder {
    pub fn as_param(&self) -> &'static str {
        match self {
            SortOrder::Descending => "desc",
            SortOrder::Ascending => "asc",
        }
    }

    pub fn from_param(value: &str) -> Option<Self> {
        match value {
            "desc" => Some(SortOrder::Descending),
            "asc" => Some(SortOrder::Ascending),
            _ => None,
        }
    }
}

/// The complete set of user-controllable search facets and pagination.
///
/// String facets use the empty string for "unset". Star bounds stay raw
/// strings; the provider rejects non-numeric values, not this layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSet {
    pub free_text: String,
    pub language: String,
    pub min_stars: String,
    pub max_stars: String,
    pub license: String,
    pub sort: SortKey,
    pub order: SortOrder,
    pub page: u32,
    pub per_page: u32,
}

impl Default for FilterSet {
    fn default() -> Self {
        Self {
            free_text: String::new(),
            language: String::new(),
            min_stars: String::new(),
            max_stars: String::new(),
            license: String::new(),
            sort: SortKey::default(),
            order: SortOrder::default(),
            page: 1,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

/// Partial update over a [`FilterSet`]; `None` leaves the field alone.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterPatch {
    pub free_text: Option<String>,
    pub language: Option<String>,
    pub min_stars: Option<String>,
    pub max_stars: Option<String>,
    pub license: Option<String>,
    pub sort: Option<SortKey>,
    pub order: Option<SortOrder>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

/// What a merge actually changed, used to pick the fetch path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ApplyOutcome {
    pub free_text_changed: bool,
    pub facet_changed: bool,
    pub page_changed: bool,
}

impl ApplyOutcome {
    pub fn changed(&self) -> bool {
        self.free_text_changed || self.facet_changed || self.page_changed
    }
}

impl FilterSet {
    /// Merges a patch, last writer wins per field.
    ///
    /// Page resets to 1 when anything but page changes, unless the patch
    /// itself carries an explicit page (deep links set both at once).
    pub fn apply(&mut self, patch: FilterPatch) -> ApplyOutcome {
        let mut outcome = ApplyOutcome::default();
        let explicit_page = patch.page.is_some();

        if let Some(value) = patch.free_text {
            if value != self.free_text {
                self.free_text = value;
                outcome.free_text_changed = true;
            }
        }
        if let Some(value) = patch.language {
            if value != self.language {
                self.language = value;
                outcome.facet_changed = true;
            }
        }
        if let Some(value) = patch.min_stars {
            if value != self.min_stars {
                self.min_stars = value;
                outcome.facet_changed = true;
            }
        }
        if let Some(value) = patch.max_stars {
            if value != self.max_stars {
                self.max_stars = value;
                outcome.facet_changed = true;
            }
        }
        if let Some(value) = patch.license {
            if value != self.license {
                self.license = value;
                outcome.facet_changed = true;
            }
        }
        if let Some(value) = patch.sort {
            if value != self.sort {
                self.sort = value;
                outcome.facet_changed = true;
            }
        }
        if let Some(value) = patch.order {
            if value != self.order {
                self.order = value;
                outcome.facet_changed = true;
            }
        }
        if let Some(value) = patch.per_page {
            if PER_PAGE_CHOICES.contains(&value) && value != self.per_page {
                self.per_page = value;
                outcome.facet_changed = true;
            }
        }
        if let Some(value) = patch.page {
            let value = value.max(1);
            if value != self.page {
                self.page = value;
                outcome.page_changed = true;
            }
        }

        let non_page_changed = outcome.free_text_changed || outcome.facet_changed;
        if non_page_changed && !explicit_page && self.page != 1 {
            self.page = 1;
            outcome.page_changed = true;
        }

        outcome
    }

    /// True when at least one result-bearing predicate exists.
    ///
    /// Sort, order and pagination alone never justify a fetch.
    pub fn has_criteria(&self) -> bool {
        !self.free_text.trim().is_empty()
            || !self.language.is_empty()
            || !self.min_stars.is_empty()
            || !self.max_stars.is_empty()
            || !self.license.is_empty()
    }
}
