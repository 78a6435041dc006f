#![no_main]

use libfuzzer_sys::fuzz_target;
use unshape_factor_push::{FactorPush, SimError, SimulationParams};

fuzz_target!(|input: (u16, i32, i32, usize, u8)| {
    // generate should never panic, even for huge row counts cut short
    let (count, start_value, step, max_rows, budget) = input;
    let params = SimulationParams::new(
        count as usize,
        start_value as i64,
        step as i64,
        max_rows,
    );
    let budget = budget as usize;
    match FactorPush::new().generate_with(&params, |done| done < budget) {
        Ok(grid) => assert_eq!(grid.height(), params.row_count()),
        Err(SimError::Cancelled { completed_rows }) => {
            assert_eq!(completed_rows, budget.max(1))
        }
        Err(_) => {}
    }
});
