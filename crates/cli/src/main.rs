//! `fpus-authz` — inspect a persisted session record.
//!
//! Usage: `fpus-authz <record.json> [route-path]`
//!
//! Prints the menu entries visible to the record's principal. With a route
//! path, also prints the guard outcome and a JSON explanation of the
//! decision. Exit code: 0 when granted (or no route given), 1 when denied,
//! 2 on usage or parse errors.

use std::process::ExitCode;

use anyhow::{bail, Context, Result};

use fpus_auth::explain;
use fpus_navigation::{check_route, route_requirement, visible_entries, GuardOutcome};
use fpus_session::SessionRecord;

fn main() -> ExitCode {
    fpus_observability::init();

    match run() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(2)
        }
    }
}

fn run() -> Result<bool> {
    let mut args = std::env::args().skip(1);
    let record_path = args
        .next()
        .context("usage: fpus-authz <record.json> [route-path]")?;
    let route = args.next();

    let raw = std::fs::read_to_string(&record_path)
        .with_context(|| format!("reading session record '{record_path}'"))?;
    let record = SessionRecord::parse(&raw).context("parsing session record")?;
    let principal = record.into_principal();

    tracing::debug!(user = %principal.id, "loaded session record");

    println!("principal: {} ({})", principal.display_name, principal.id);
    println!("visible menu:");
    for entry in visible_entries(Some(&principal)) {
        println!("  {:<12} {}", entry.id, entry.path);
    }

    let Some(route) = route else {
        return Ok(true);
    };

    let Some(requirement) = route_requirement(&route) else {
        bail!("unknown route '{route}'");
    };

    let outcome = check_route(Some(&principal), requirement);
    println!("route {route}: {outcome:?}");

    let explanation = explain(Some(&principal), requirement);
    println!("{}", serde_json::to_string_pretty(&explanation)?);

    Ok(outcome == GuardOutcome::Proceed)
}
