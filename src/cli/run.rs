use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{CommandResult, generate::generate, init::init},
    exit_status::ExitStatus,
    report,
};

/// Main entry point for the resgen CLI.
///
/// Dispatches to the command handler, prints its result and maps it onto an exit status.
/// Errors are returned to `main`, which reports them and exits with [`ExitStatus::Error`].
pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let Some(Arguments { command }) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    let result = match command {
        Some(Command::Generate(cmd)) => generate(cmd)?,
        Some(Command::Init) => init()?,
        None => anyhow::bail!("No command provided. Use --help to see available commands."),
    };

    report::print(&result);

    Ok(exit_status(&result))
}

fn exit_status(result: &CommandResult) -> ExitStatus {
    if result.error_count > 0 {
        ExitStatus::Failure
    } else {
        ExitStatus::Success
    }
}
