use polar_flow_client::SportResult;

pub const TOTAL_NAME: &str = "Total";

/// Append the `Total` row, summing every entry in `results`.
///
/// The total is appended even when everything sums to zero.
pub fn with_total(mut results: Vec<SportResult>) -> Vec<SportResult> {
    let total = results
        .iter()
        .fold(SportResult::empty(TOTAL_NAME), |mut acc, r| {
            acc.distance += r.distance;
            acc.duration += r.duration;
            acc.count += r.count;
            acc.ascent += r.ascent;
            acc
        });
    results.push(total);
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sport(name: &str, distance: f64, duration: u64, count: u64, ascent: i64) -> SportResult {
        SportResult {
            name: name.into(),
            distance,
            duration,
            count,
            ascent,
        }
    }

    #[test]
    fn total_is_last_and_sums() {
        let res = with_total(vec![
            sport("MOUNTAIN_BIKING", 80.5, 14_400, 3, 1200),
            sport("TRAIL_RUNNING", 21.25, 9000, 2, 650),
        ]);
        assert_eq!(res.len(), 3);
        assert_eq!(res[0].name, "MOUNTAIN_BIKING");
        assert_eq!(res[1].name, "TRAIL_RUNNING");
        let total = &res[2];
        assert_eq!(total.name, "Total");
        assert!((total.distance - 101.75).abs() < 1e-9);
        assert_eq!(total.duration, 23_400);
        assert_eq!(total.count, 5);
        assert_eq!(total.ascent, 1850);
    }

    #[test]
    fn empty_input_still_has_total() {
        let res = with_total(vec![]);
        assert_eq!(res, vec![SportResult::empty("Total")]);
    }
}
