/// What the plotter was asked to do on the command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Wrong number of arguments; carries the usage line to print.
    Usage(String),
    /// Plot the given expression.
    Plot(String),
}

/// Expects exactly one argument after the program name.
pub fn parse_args<I>(args: I) -> Command
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let program = args.next().unwrap_or_else(|| "plotter".to_string());
    let rest: Vec<String> = args.collect();

    match <[String; 1]>::try_from(rest) {
        Ok([expression]) => Command::Plot(expression),
        Err(_) => Command::Usage(format!("Usage: {program} <expression>")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn single_argument_is_the_expression() {
        assert_eq!(
            parse_args(args(&["plotter", "sin(x)"])),
            Command::Plot("sin(x)".to_string())
        );
    }

    #[test]
    fn missing_argument_prints_usage() {
        assert_eq!(
            parse_args(args(&["./plotter"])),
            Command::Usage("Usage: ./plotter <expression>".to_string())
        );
    }

    #[test]
    fn extra_arguments_print_usage() {
        assert!(matches!(
            parse_args(args(&["plotter", "x", "y"])),
            Command::Usage(_)
        ));
    }

    #[test]
    fn empty_argv_still_has_a_usage_line() {
        assert_eq!(
            parse_args(Vec::new()),
            Command::Usage("Usage: plotter <expression>".to_string())
        );
    }
}
