use std::io::{self, Write};

use monod_solvers::Trajectory;

const RULE_WIDTH: usize = 56;

/// Writes a trajectory as an aligned `step time biomass substrate` table.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_table<W: Write>(out: &mut W, trajectory: &Trajectory) -> io::Result<()> {
    writeln!(
        out,
        "{:<8}{:<12}{:<18}{:<18}",
        "step", "time", "biomass", "substrate"
    )?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;

    for (step, (time, state)) in trajectory.iter().enumerate() {
        writeln!(
            out,
            "{step:<8}{time:<12.6}{:<18.12}{:<18.12}",
            state.biomass, state.substrate
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use monod_core::MonodParams;
    use monod_solvers::euler;

    fn render(trajectory: &Trajectory) -> String {
        let mut buf = Vec::new();
        write_table(&mut buf, trajectory).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn writes_header_rule_and_one_row_per_point() {
        let trajectory = euler::integrate(&MonodParams::default(), 0.1, 1.0, 1.0, 0.1).unwrap();

        let text = render(&trajectory);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 2 + 10);
        assert!(lines[0].starts_with("step    time        biomass"));
        assert_eq!(lines[1], "-".repeat(RULE_WIDTH));
    }

    #[test]
    fn rows_carry_fixed_precision_values() {
        let trajectory = euler::integrate(&MonodParams::default(), 0.1, 1.0, 1.0, 0.1).unwrap();

        let text = render(&trajectory);
        let row: Vec<&str> = text.lines().nth(3).unwrap().split_whitespace().collect();

        assert_eq!(row, vec!["1", "0.100000", "0.104545454545", "0.995454545455"]);
    }
}
