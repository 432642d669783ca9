use joblist_core::{PageSize, SortColumn, SortDirection};

pub const HELP: &str = "Commands: open <row> | sort <start-time|duration|end-time|state> [asc|desc] | page <rows|all> | refresh | quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// 1-based row number as printed in the table.
    Open(usize),
    Sort(SortColumn, SortDirection),
    Page(PageSize),
    Refresh,
    Help,
    Quit,
    Unknown(String),
}

pub fn parse_command(line: &str) -> Command {
    let mut words = line.split_whitespace();
    let parsed = match (words.next(), words.next(), words.next(), words.next()) {
        (Some("open"), Some(row), None, None) => row.parse().ok().map(Command::Open),
        (Some("sort"), Some(column), direction, None) => {
            let direction = match direction {
                None | Some("desc") => Some(SortDirection::Descend),
                Some("asc") => Some(SortDirection::Ascend),
                Some(_) => None,
            };
            column
                .parse()
                .ok()
                .zip(direction)
                .map(|(column, direction)| Command::Sort(column, direction))
        }
        (Some("page"), Some("all"), None, None) => Some(Command::Page(PageSize::Unbounded)),
        (Some("page"), Some(rows), None, None) => rows
            .parse()
            .ok()
            .filter(|rows| *rows > 0)
            .map(|rows| Command::Page(PageSize::Rows(rows))),
        (Some("refresh"), None, None, None) => Some(Command::Refresh),
        (Some("help"), None, None, None) => Some(Command::Help),
        (Some("quit" | "q"), None, None, None) => Some(Command::Quit),
        _ => None,
    };
    parsed.unwrap_or_else(|| Command::Unknown(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_row_activation() {
        assert_eq!(parse_command("open 3"), Command::Open(3));
        assert_eq!(
            parse_command("open three"),
            Command::Unknown("open three".to_string())
        );
    }

    #[test]
    fn sort_defaults_to_descending() {
        assert_eq!(
            parse_command("sort duration"),
            Command::Sort(SortColumn::Duration, SortDirection::Descend)
        );
        assert_eq!(
            parse_command("  sort end-time asc "),
            Command::Sort(SortColumn::EndTime, SortDirection::Ascend)
        );
        assert_eq!(
            parse_command("sort name"),
            Command::Unknown("sort name".to_string())
        );
        assert_eq!(
            parse_command("sort state sideways"),
            Command::Unknown("sort state sideways".to_string())
        );
    }

    #[test]
    fn page_accepts_all_or_positive_rows() {
        assert_eq!(parse_command("page all"), Command::Page(PageSize::Unbounded));
        assert_eq!(parse_command("page 10"), Command::Page(PageSize::Rows(10)));
        assert_eq!(parse_command("page 0"), Command::Unknown("page 0".to_string()));
    }

    #[test]
    fn bare_words() {
        assert_eq!(parse_command("q"), Command::Quit);
        assert_eq!(parse_command("refresh"), Command::Refresh);
        assert_eq!(parse_command("help"), Command::Help);
        assert_eq!(parse_command(""), Command::Unknown(String::new()));
    }
}
