//! Identity transformation
//!
//! Returns the genesis document untouched. The vesting rows are still read to
//! the end so a malformed vesting file fails the run instead of passing
//! silently.

use crate::cli::Arguments;
use crate::io::VestingRows;
use crate::transform::GenesisTransform;
use crate::types::GenesisError;
use serde_json::Value;
use tracing::debug;

/// Transformation that prints the genesis document as it was read
#[derive(Debug, Clone, Copy, Default)]
pub struct PassThrough;

impl GenesisTransform for PassThrough {
    type Output = Value;

    fn transform(
        self,
        genesis: Value,
        vesting_info: VestingRows,
        parsed_args: &Arguments,
    ) -> Result<Value, GenesisError> {
        let mut rows = 0usize;
        for row in vesting_info {
            row?;
            rows += 1;
        }

        debug!(
            rows,
            chain_id = %parsed_args.chain_id,
            "vesting info drained, genesis unchanged"
        );
        Ok(genesis)
    }
}
