//! F5 BIG-IP Ansible modules
//!
//! One executable implements every module of the catalog. Ansible runs it as a
//! binary module: the single argument is a JSON file with the module
//! arguments and the result is one JSON document on stdout. The module to run
//! is taken from `--module` or from the name the binary was invoked as, so it
//! can be installed once and symlinked as `bigip_ltm_pool`, `bigip_sys_ntp`, ...
//!
//! Logs go to stderr (stdout belongs to the module result); `RUST_LOG`
//! controls the level, default `warn`.

mod error;
mod invocation;
mod provider;
mod reconcile_helpers;
#[cfg(test)]
mod reconcile_helpers_test;
mod reconciler;
mod result;
mod test_utils;

use anyhow::Context;
use bigip_modules::{registry, validate};
use clap::Parser;
use invocation::{module_name, Invocation};
use reconciler::Reconciler;
use result::{ModuleFailure, ModuleResult};
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

/// Ansible binary module managing F5 BIG-IP configuration
#[derive(Parser, Debug)]
#[command(name = "f5bigip")]
#[command(version)]
#[command(about = "Manage F5 BIG-IP configuration through iControl REST", long_about = None)]
struct Cli {
    /// JSON file with the module arguments; read from stdin when omitted
    args_file: Option<PathBuf>,

    /// Module to run; defaults to the executable name
    #[arg(short, long, env = "F5BIGIP_MODULE")]
    module: Option<String>,

    /// Print the module catalog and exit
    #[arg(long)]
    list: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    if rustls::crypto::ring::default_provider().install_default().is_err() {
        debug!("rustls crypto provider already installed");
    }

    if cli.list {
        for definition in registry::all_modules() {
            println!("{}\t{}", definition.name, definition.description);
        }
        return ExitCode::SUCCESS;
    }

    let argv0 = std::env::args().next().unwrap_or_default();
    match run(&cli, &argv0).await {
        Ok(result) => {
            emit(&result);
            ExitCode::SUCCESS
        }
        Err(e) => {
            let msg = format!("{:#}", e);
            error!("{}", msg);
            emit(&ModuleFailure::new(msg));
            ExitCode::FAILURE
        }
    }
}

/// Validate the arguments, connect and reconcile
async fn run(cli: &Cli, argv0: &str) -> anyhow::Result<ModuleResult> {
    let name = module_name(cli.module.as_deref(), argv0)
        .context("cannot determine which module to run; pass --module")?;
    let definition = registry::find(&name)?;
    info!("Running {}", definition.name);

    let invocation = Invocation::read(cli.args_file.as_deref())
        .with_context(|| format!("failed to read arguments for {}", definition.name))?;
    let params = validate::validate(definition, &invocation.args)?;

    let client = provider::connect(&params).await?;
    let reconciler = Reconciler::new(client, invocation.context);
    let result = reconciler.reconcile(definition, &params).await?;

    Ok(result.with_invocation(params.to_masked_json(definition)))
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

/// Print the module result as the single JSON document on stdout
fn emit<T: Serialize>(value: &T) {
    match serde_json::to_string(value) {
        Ok(json) => println!("{}", json),
        Err(e) => println!(
            "{}",
            serde_json::json!({"failed": true, "msg": format!("failed to serialize module result: {}", e)})
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_args_file_and_module() {
        let cli = Cli::try_parse_from(["f5bigip", "--module", "bigip_ltm_pool", "/tmp/args.json"]).unwrap();
        assert_eq!(cli.module.as_deref(), Some("bigip_ltm_pool"));
        assert_eq!(cli.args_file, Some(PathBuf::from("/tmp/args.json")));
        assert!(!cli.list);
    }

    #[tokio::test]
    async fn test_run_unknown_module_fails_before_reading_args() {
        let cli = Cli::try_parse_from(["f5bigip", "/nonexistent/args.json"]).unwrap();
        let err = run(&cli, "/usr/local/bin/bigip_ltm_nothing").await.unwrap_err();
        assert_eq!(format!("{:#}", err), "Unknown module: bigip_ltm_nothing");
    }

    #[tokio::test]
    async fn test_run_reports_validation_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(
            &mut file,
            br#"{"ANSIBLE_MODULE_ARGS": {"f5_hostname": "h", "f5_username": "u", "f5_password": "p", "name": "vs", "enabled": true, "disabled": true, "destination": "10.0.0.1:80"}}"#,
        )
        .unwrap();
        let cli = Cli {
            args_file: Some(file.path().to_path_buf()),
            module: Some("bigip_ltm_virtual".to_string()),
            list: false,
        };
        let err = run(&cli, "f5bigip").await.unwrap_err();
        assert_eq!(format!("{:#}", err), "parameters are mutually exclusive: enabled|disabled");
    }
}
