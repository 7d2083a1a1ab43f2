use clap::Parser;
use clap_verbosity_flag::Verbosity;
use log::debug;
use postfix_calculator::interpreter::{convert, evaluate, tokens_to_string};
use std::process::ExitCode;

/// Evaluates the given arithmetic expression
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Arguments {
    /// The expression to evaluate, e.g. "(2 + 3) * 4". Operators: + - * / ^ and $ (root)
    #[clap(allow_hyphen_values = true)]
    expression: Vec<String>,

    /// Print the expression in postfix notation before the result
    #[clap(short, long)]
    postfix: bool,

    #[clap(flatten)]
    verbose: Verbosity,
}

fn main() -> ExitCode {
    let args = Arguments::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .parse_default_env()
        .init();

    let expression = match single_expression(&args.expression) {
        Some(expression) => expression,
        None => {
            debug!("Expected one expression, got {}", args.expression.len());
            println!("error in parameters");
            return ExitCode::from(2);
        }
    };

    match run(expression, args.postfix) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(err) => {
            debug!("Could not evaluate {:?}: {:?}", expression, err);
            println!("{}", err);
            ExitCode::FAILURE
        }
    }
}

fn single_expression(expressions: &[String]) -> Option<&str> {
    match expressions {
        [expression] => Some(expression),
        _ => None,
    }
}

/// Evaluates the expression and renders what should be printed for it,
/// optionally preceded by its postfix form on a line of its own.
fn run(expression: &str, show_postfix: bool) -> anyhow::Result<String> {
    let value = evaluate(expression)?;
    if show_postfix {
        let postfix_tokens = convert(expression)?;
        return Ok(format!("{}\n{}", tokens_to_string(&postfix_tokens)?, value));
    }
    Ok(value.to_string())
}
