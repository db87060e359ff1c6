//! The `ttl` binary: drive the engine against a host declared on the
//! command line.

mod args;

use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::Parser;
use colored::Colorize;

use ttl_checker::{NameEnv, TypeEnv, evaluate, parse_and_validate};
use ttl_common::LineMap;
use ttl_common::diagnostics::{Diagnostic, DiagnosticCategory};
use ttl_solver::{ProgramHost, TypeHost, TypeId};

use crate::args::{CliArgs, Command};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = CliArgs::parse();
    match run(args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

fn run(args: CliArgs) -> Result<ExitCode> {
    match args.command {
        Command::Check { expr } => {
            let (ast, diagnostics) = parse_and_validate(&expr, "<expr>");
            render_diagnostics(&expr, &diagnostics);
            if ast.is_some() {
                println!("ok");
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::FAILURE)
            }
        }
        Command::Eval {
            expr,
            natives,
            type_vars,
            name_vars,
            slots,
            json,
        } => {
            let host = ProgramHost::new();
            for native in &natives {
                register_native(&host, native)?;
            }
            for slot in &slots {
                let (name, source) = split_binding(slot)?;
                let ty = eval_type_binding(&host, name, source)?;
                host.bind_slot(name, ty);
            }

            let mut type_env = TypeEnv::new();
            for binding in &type_vars {
                let (name, source) = split_binding(binding)?;
                let ty = eval_type_binding(&host, name, source)?;
                type_env = type_env.extend(name, ty);
            }
            let mut name_env = NameEnv::new();
            for binding in &name_vars {
                let (name, value) = split_binding(binding)?;
                name_env = name_env.extend(name, value.to_string());
            }

            let (ast, mut diagnostics) = parse_and_validate(&expr, "<expr>");
            let Some(ast) = ast else {
                render_diagnostics(&expr, &diagnostics);
                return Ok(ExitCode::FAILURE);
            };
            let (result, warnings) = evaluate(&ast, &host, &type_env, &name_env, "<expr>");
            diagnostics.extend(warnings);

            if json {
                let payload = serde_json::json!({
                    "type": host.format_type(result),
                    "diagnostics": diagnostics,
                });
                println!("{}", serde_json::to_string_pretty(&payload)?);
            } else {
                render_diagnostics(&expr, &diagnostics);
                println!("{}", host.format_type(result));
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// `NAME` or `NAME:ARITY`.
fn register_native(host: &ProgramHost, spec: &str) -> Result<()> {
    match spec.split_once(':') {
        Some((name, arity)) => {
            let arity: u32 = arity
                .parse()
                .with_context(|| format!("invalid arity in --native {spec}"))?;
            host.register_templatizable(name, arity);
        }
        None => {
            host.register_native(spec);
        }
    }
    Ok(())
}

fn split_binding(binding: &str) -> Result<(&str, &str)> {
    match binding.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name, value)),
        _ => bail!("expected NAME=VALUE, got {binding:?}"),
    }
}

/// Evaluate a binding's value as a TTL expression with empty environments.
fn eval_type_binding(host: &ProgramHost, name: &str, source: &str) -> Result<TypeId> {
    let (ast, diagnostics) = parse_and_validate(source, name);
    let Some(ast) = ast else {
        render_diagnostics(source, &diagnostics);
        bail!("invalid type expression for {name}: {source:?}");
    };
    let (ty, warnings) = evaluate(&ast, host, &TypeEnv::new(), &NameEnv::new(), name);
    render_diagnostics(source, &warnings);
    Ok(ty)
}

fn render_diagnostics(source: &str, diagnostics: &[Diagnostic]) {
    if diagnostics.is_empty() {
        return;
    }
    let line_map = LineMap::build(source);
    for diagnostic in diagnostics {
        let position = line_map.offset_to_position(diagnostic.start);
        let label = match diagnostic.category {
            DiagnosticCategory::Error => "error".red().bold(),
            DiagnosticCategory::Warning => "warning".yellow().bold(),
            _ => "note".normal(),
        };
        eprintln!(
            "{}:{}:{}: {label} TTL{}: {}",
            diagnostic.file,
            position.line + 1,
            position.character + 1,
            diagnostic.code,
            diagnostic.message_text
        );
    }
}
