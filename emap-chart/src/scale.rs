//! Linear scale mapping data values to horizontal pixel offsets.

/// A continuous linear mapping from a data domain to a pixel range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Map a domain value into the range.
    ///
    /// A zero-width domain maps every value to the middle of the range.
    pub fn apply(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        let t = if span == 0.0 { 0.5 } else { (value - d0) / span };
        r0 + t * (r1 - r0)
    }

    /// Roughly `count` evenly spaced values inside the domain, stepping by
    /// 1, 2 or 5 times a power of ten.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (mut start, mut stop) = self.domain;
        if count == 0 || !start.is_finite() || !stop.is_finite() {
            return Vec::new();
        }
        if start == stop {
            return vec![start];
        }
        let reverse = stop < start;
        if reverse {
            std::mem::swap(&mut start, &mut stop);
        }

        let step = (stop - start) / count as f64;
        let power = step.log10().floor();
        let error = step / 10f64.powf(power);
        let factor = if error >= 50f64.sqrt() {
            10.0
        } else if error >= 10f64.sqrt() {
            5.0
        } else if error >= 2f64.sqrt() {
            2.0
        } else {
            1.0
        };

        let mut ticks = Vec::new();
        if power >= 0.0 {
            let increment = factor * 10f64.powf(power);
            let first = (start / increment).ceil() as i64;
            let last = (stop / increment).floor() as i64;
            for i in first..=last {
                ticks.push(i as f64 * increment);
            }
        } else {
            // Divide by the inverse step so decimals like 0.1 stay exact.
            let inverse = 10f64.powf(-power) / factor;
            let first = (start * inverse).ceil() as i64;
            let last = (stop * inverse).floor() as i64;
            for i in first..=last {
                ticks.push(i as f64 / inverse);
            }
        }

        if reverse {
            ticks.reverse();
        }
        ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_domain_ends_to_range_ends() {
        let scale = LinearScale::new((-100.0, 300.0), (0.0, 200.0));
        assert_eq!(scale.apply(-100.0), 0.0);
        assert_eq!(scale.apply(300.0), 200.0);
        assert_eq!(scale.apply(0.0), 50.0);
    }

    #[test]
    fn degenerate_domain_maps_to_middle() {
        let scale = LinearScale::new((0.0, 0.0), (0.0, 120.0));
        assert_eq!(scale.apply(0.0), 60.0);
        assert_eq!(scale.apply(42.0), 60.0);
    }

    #[test]
    fn ticks_are_nice_and_inside_domain() {
        let scale = LinearScale::new((0.0, 82_600.0), (0.0, 300.0));
        let ticks = scale.ticks(4);
        assert_eq!(ticks, vec![0.0, 20_000.0, 40_000.0, 60_000.0, 80_000.0]);
    }

    #[test]
    fn ticks_cover_negative_domain() {
        let scale = LinearScale::new((-9_830.0, 82_600.0), (0.0, 300.0));
        let ticks = scale.ticks(4);
        assert_eq!(ticks.first(), Some(&0.0));
        assert_eq!(ticks.last(), Some(&80_000.0));
        assert!(ticks.iter().all(|t| *t >= -9_830.0 && *t <= 82_600.0));

        let wide = LinearScale::new((-60_000.0, 82_600.0), (0.0, 300.0));
        assert_eq!(wide.ticks(4), vec![-50_000.0, 0.0, 50_000.0]);
    }

    #[test]
    fn small_domains_produce_decimal_ticks() {
        let scale = LinearScale::new((0.0, 1.0), (0.0, 100.0));
        assert_eq!(scale.ticks(5), vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
    }

    #[test]
    fn empty_domain_has_single_tick() {
        let scale = LinearScale::new((5.0, 5.0), (0.0, 100.0));
        assert_eq!(scale.ticks(4), vec![5.0]);
    }
}
