use scout_core::SearchViewModel;

/// Prints the current session snapshot as plain text rows.
pub fn render(view: &SearchViewModel) {
    if view.loading {
        println!("Searching...");
        return;
    }

    if let Some(error) = &view.error {
        println!("Error: {error}");
        return;
    }

    if !view.has_searched {
        println!("Enter a query or filter to search. Type `help` for commands.");
        return;
    }

    if view.hits.is_empty() {
        println!("No repositories found.");
        return;
    }

    println!(
        "{} repositories (page {} of {})",
        view.total_count, view.filters.page, view.total_pages
    );
    for hit in &view.hits {
        let language = hit.language.as_deref().unwrap_or("-");
        let license = hit.license.as_deref().unwrap_or("-");
        println!(
            "  {:<40} ★ {:<8} ⑂ {:<6} {:<12} {}",
            hit.full_name, hit.stargazers, hit.forks, language, license
        );
        if let Some(description) = &hit.description {
            println!("      {description}");
        }
        if !hit.topics.is_empty() {
            println!("      [{}]", hit.topics.join(", "));
        }
    }
}
