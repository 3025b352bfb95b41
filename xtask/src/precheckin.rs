// Licensed under the Apache-2.0 license

use anyhow::Result;

use crate::PROJECT_ROOT;

pub(crate) fn precheckin() -> Result<()> {
    crate::reg_gen_driver::generate(&PROJECT_ROOT, true)?;
    Ok(())
}
