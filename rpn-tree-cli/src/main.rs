use anyhow::{anyhow, Context, Result};
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use log::info;
use rpn_tree::interpreter::parser::{infix_to_postfix, new_tree_from_str, validate_variables};

/// Converts an arithmetic expression to postfix, builds its syntax tree and evaluates it
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Arguments {
    /// The expression to process, in infix form unless --postfix is given
    expression: String,

    /// Treat the expression as space-separated postfix, with `~` for negation
    #[clap(long)]
    postfix: bool,

    /// Value of a variable, as name=value. May be repeated
    #[clap(short, long = "set", parse(try_from_str = parse_variable))]
    set: Vec<(String, f64)>,

    /// Print the syntax tree as an indented list of nodes
    #[clap(long)]
    dump: bool,

    /// Draw the syntax tree with branches
    #[clap(long)]
    tree: bool,

    #[clap(flatten)]
    verbose: Verbosity<WarnLevel>,
}

fn parse_variable(text: &str) -> Result<(String, f64)> {
    let (name, value) = text
        .split_once('=')
        .ok_or_else(|| anyhow!("expected name=value, found '{}'", text))?;
    let value = value
        .trim()
        .parse::<f64>()
        .with_context(|| format!("'{}' is not a number", value))?;
    Ok((name.trim().to_string(), value))
}

fn main() -> Result<()> {
    let args = Arguments::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let postfix = if args.postfix {
        args.expression.clone()
    } else {
        println!("Infix input: {}", args.expression);
        infix_to_postfix(&args.expression)
            .with_context(|| format!("Could not convert '{}'", args.expression))?
    };
    println!("Postfix expression: {}", postfix.trim_end());

    let tree = new_tree_from_str(&postfix)
        .with_context(|| format!("Could not build a tree from '{}'", postfix.trim_end()))?;
    println!("Infix expression: {}", tree.to_infix());

    let variables = tree.collect_variables();
    if variables.is_empty() {
        println!("Variables in expression: (none)");
    } else {
        println!("Variables in expression: {}", variables.join(", "));
    }

    if args.dump {
        print!("{}", tree.render_indented());
    }
    if args.tree {
        print!("{}", tree.render_tree());
    }

    if !args.set.is_empty() {
        let values: Vec<String> = args
            .set
            .iter()
            .map(|(name, value)| format!("{}={}", name, value))
            .collect();
        println!("Variable values: {}", values.join(", "));
    }

    if !validate_variables(&tree, &args.set).is_valid() {
        println!("Warning: Variable mismatch detected!");
    }

    info!("Evaluating with {} variable value(s)", args.set.len());
    let result = tree
        .evaluate_pairs(&args.set)
        .context("Could not evaluate the expression")?;
    println!("Result: {:.6}", result);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variable_assignment_is_split_on_equals_sign() {
        assert_eq!(parse_variable("rate = 0.5").unwrap(), ("rate".to_string(), 0.5));
    }

    #[test]
    fn variable_without_value_is_rejected() {
        parse_variable("rate").expect_err("Should return Err");
    }

    #[test]
    fn variable_with_non_numeric_value_is_rejected() {
        parse_variable("rate=fast").expect_err("Should return Err");
    }

    #[test]
    fn arguments_are_parsed() {
        let args = Arguments::parse_from([
            "rpn-tree", "a b +", "--postfix", "-s", "a=1", "--set", "b=2",
        ]);

        assert!(args.postfix);
        assert_eq!(args.set, [("a".to_string(), 1.0), ("b".to_string(), 2.0)]);
    }
}
