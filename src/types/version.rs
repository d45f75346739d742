use aliri_braid::braid;
use std::cmp::Ordering;

/// Version string reported by a Domino deployment, e.g. `4.1.3.0`
#[braid(serde)]
pub struct DeploymentVersion;

impl DeploymentVersion {
    /// Whether this deployment is at least version `minimum`.
    ///
    /// Components are compared numerically, so `1.9.0.0` is older than `1.53.0.0`.
    pub fn at_least(&self, minimum: &str) -> bool {
        compare_versions(self.as_str(), minimum) != Ordering::Less
    }
}

/// Compare two dot-separated version strings component by component.
///
/// Missing components count as zero and only the leading digits of each
/// component are considered, so `"1.53"` equals `"1.53.0.0"` and
/// `"4.2.0-rc1"` equals `"4.2.0"`. Components too large for a `u64` saturate.
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    let a = components(a);
    let b = components(b);
    let len = a.len().max(b.len());
    (0..len)
        .map(|i| {
            let x = a.get(i).copied().unwrap_or(0);
            let y = b.get(i).copied().unwrap_or(0);
            x.cmp(&y)
        })
        .find(|o| *o != Ordering::Equal)
        .unwrap_or(Ordering::Equal)
}

fn components(version: &str) -> Vec<u64> {
    version
        .trim()
        .split('.')
        .map(|part| {
            let digits: String = part.chars().take_while(|c| c.is_ascii_digit()).collect();
            if digits.is_empty() {
                0
            } else {
                digits.parse().unwrap_or(u64::MAX)
            }
        })
        .collect()
}
