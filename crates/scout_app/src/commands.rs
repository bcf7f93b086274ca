use scout_core::{FilterPatch, Msg, SortKey, SortOrder};

/// What one line of terminal input asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Update(Msg),
    ShowUrl,
    Help,
    Quit,
}

/// Parses one input line. `-` clears a facet; star bounds take `-` for
/// an open end. Unknown input gets the help screen rather than an error.
pub fn parse_command(line: &str) -> Command {
    let line = line.trim();
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    match verb {
        "q" => patch(FilterPatch {
            free_text: Some(rest.to_string()),
            ..Default::default()
        }),
        "language" | "lang" => patch(FilterPatch {
            language: Some(facet_value(rest)),
            ..Default::default()
        }),
        "license" => patch(FilterPatch {
            license: Some(facet_value(rest)),
            ..Default::default()
        }),
        "stars" => {
            let mut bounds = rest.split_whitespace();
            let min = bounds.next().unwrap_or("-");
            let max = bounds.next().unwrap_or("-");
            patch(FilterPatch {
                min_stars: Some(facet_value(min)),
                max_stars: Some(facet_value(max)),
                ..Default::default()
            })
        }
        "sort" => match SortKey::from_param(rest) {
            Some(sort) => patch(FilterPatch {
                sort: Some(sort),
                ..Default::default()
            }),
            None => Command::Help,
        },
        "order" => match SortOrder::from_param(rest) {
            Some(order) => patch(FilterPatch {
                order: Some(order),
                ..Default::default()
            }),
            None => Command::Help,
        },
        "page" => match rest.parse() {
            Ok(page) => patch(FilterPatch {
                page: Some(page),
                ..Default::default()
            }),
            Err(_) => Command::Help,
        },
        "per" => match rest.parse() {
            Ok(per_page) => patch(FilterPatch {
                per_page: Some(per_page),
                ..Default::default()
            }),
            Err(_) => Command::Help,
        },
        "url" => Command::ShowUrl,
        "quit" | "exit" => Command::Quit,
        _ => Command::Help,
    }
}

fn patch(value: FilterPatch) -> Command {
    Command::Update(Msg::FiltersUpdated(value))
}

fn facet_value(raw: &str) -> String {
    if raw == "-" {
        String::new()
    } else {
        raw.to_string()
    }
}

pub const HELP_TEXT: &str = "\
Commands:
  q <text>            set the free-text query (q alone clears it)
  language <v> | -    filter by language, - clears
  stars <min> <max>   star range, - for an open end (e.g. stars 100 -)
  license <v> | -     filter by license, - clears
  sort stars|forks|updated
  order desc|asc
  page <n>            go to page n
  per 10|25|50|100    page size
  url                 print the shareable query string
  quit                exit";
