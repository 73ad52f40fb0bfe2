use wsp_config::{MergeReport, MergeStatus};
use wsp_core::error::{Result, WspError};
use wsp_core::{wsp_info, wsp_success, wsp_warning};
use wsp_messages::{msg, MESSAGES};
use wsp_orchestrator::{
    RestartDecision, SnapshotResult, SwitchOptions, SwitchOutcome, SwitchReport,
    WorkspaceManager,
};

pub fn handle_switch(
    manager: &WorkspaceManager<'_>,
    name: &str,
    save_current_state: bool,
    force: bool,
) -> Result<()> {
    let options = SwitchOptions {
        save_current_state,
        force,
    };

    match manager.switch(name, options)? {
        SwitchOutcome::Cancelled => wsp_info!("{}", MESSAGES.switch.cancelled),
        SwitchOutcome::Completed(report) => print_report(name, &report),
    }
    Ok(())
}

fn print_report(name: &str, report: &SwitchReport) {
    let sw = &MESSAGES.switch;

    match &report.snapshot {
        SnapshotResult::NotRequested => {}
        SnapshotResult::Saved(path) => {
            wsp_info!("{}", msg!(sw.snapshot_saved, path = path.display().to_string()))
        }
        SnapshotResult::Failed(error) => {
            wsp_warning!("{}", msg!(sw.snapshot_failed, error = error))
        }
    }

    for step in report.steps.iter().filter(|step| !step.succeeded()) {
        wsp_warning!(
            "{}",
            msg!(
                sw.step_failed,
                step = step.action.kind(),
                target = step.action.target(),
                error = step.error.clone().unwrap_or_default()
            )
        );
    }

    if let Some(merge) = &report.merge {
        print_merge(merge);
    }

    match &report.restart {
        RestartDecision::NotNeeded => {}
        RestartDecision::Restarted(results) => {
            for result in results {
                match &result.error {
                    None => wsp_success!("{}", msg!(sw.restarted, target = result.action.target())),
                    Some(error) => wsp_warning!(
                        "{}",
                        msg!(sw.restart_failed, target = result.action.target(), error = error)
                    ),
                }
            }
        }
        RestartDecision::Declined(targets) => {
            wsp_warning!("{}", msg!(sw.restart_declined, targets = targets.join(", ")))
        }
    }

    match report.partial_failure() {
        Some(WspError::PartialApply { failed, total }) => wsp_warning!(
            "{}",
            msg!(
                sw.completed_with_failures,
                name = name,
                failed = failed.to_string(),
                total = total.to_string()
            )
        ),
        _ => wsp_success!("{}", msg!(sw.completed, name = name)),
    }
}

fn print_merge(merge: &MergeReport) {
    let sw = &MESSAGES.switch;
    for outcome in &merge.outcomes {
        match &outcome.status {
            MergeStatus::Updated { .. } => {
                wsp_success!("{}", msg!(sw.mcp_target_updated, target = &outcome.target))
            }
            MergeStatus::NotInstalled => {
                wsp_info!("{}", msg!(sw.mcp_target_not_installed, target = &outcome.target))
            }
            MergeStatus::Failed(error) => wsp_warning!(
                "{}",
                msg!(sw.mcp_target_failed, target = &outcome.target, error = error)
            ),
        }
    }
}
