//! Implementation of the `genhooks pre-gen` command.

use super::resolve_context;
use crate::cli::PreGenArgs;
use crate::error::Result;
use crate::validate::run_pre_gen;

/// Execute the `genhooks pre-gen` command.
///
/// On success with `--emit-context`, the normalized context is printed as
/// JSON so the driver can render with the trimmed email.
pub fn cmd_pre_gen(args: PreGenArgs) -> Result<()> {
    let mut ctx = resolve_context(&args.context)?;

    run_pre_gen(&mut ctx)?;

    if args.emit_context {
        println!("{}", ctx.to_json()?);
    }

    Ok(())
}
