use clap::{Parser, Subcommand};

/// CLI arguments for the ttl binary.
#[derive(Parser, Debug)]
#[command(name = "ttl", version, about = "Type transformation language engine")]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse, validate, and evaluate a type transformation expression.
    Eval {
        /// The TTL expression, e.g. "mapunion(T, (x) => type('Array', x))".
        expr: String,

        /// Register a native type; an arity makes it templatizable.
        #[arg(long = "native", value_name = "NAME[:ARITY]")]
        natives: Vec<String>,

        /// Bind a type variable; the value is itself a TTL expression.
        #[arg(long = "type-var", value_name = "NAME=EXPR")]
        type_vars: Vec<String>,

        /// Bind a name variable to a string.
        #[arg(long = "name-var", value_name = "NAME=STRING")]
        name_vars: Vec<String>,

        /// Declare a program symbol for typeOfVar; the value is a TTL
        /// expression.
        #[arg(long = "slot", value_name = "NAME=EXPR")]
        slots: Vec<String>,

        /// Emit the result and diagnostics as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Parse and validate only; exit 1 when the expression is not a
    /// well-formed TTL term.
    Check {
        /// The TTL expression.
        expr: String,
    },
}
