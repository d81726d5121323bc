//! Console front end: the startup questions and the printed curve points.
//!
//! Input is a stream of whitespace separated tokens, read in this order:
//! order, steps, tangent steps (tangent variant only), control point count,
//! then `x y` for every control point.
use std::collections::VecDeque;
use std::io::{BufRead, Write};
use std::str::FromStr;

use log::{info, warn};

use crate::error::InputError;
use crate::model::CurveConfig;
use crate::point2::Point2;

/// Everything read from the console at startup
#[derive(Debug, Clone, PartialEq)]
pub struct Setup {
    pub order: usize,
    pub samples: usize,
    pub tangent_samples: Option<usize>,
    pub control_points: Vec<Point2<f64>>,
}

impl Setup {
    pub fn config(&self) -> CurveConfig {
        CurveConfig {
            order: self.order,
            samples: self.samples,
            tangent_samples: self.tangent_samples,
        }
    }

    /// True when the number of control points matches the order
    pub fn is_control_point_count_valid(&self) -> bool {
        self.control_points.len().checked_sub(1) == Some(self.order)
    }
}

/// Pulls whitespace separated tokens out of a reader, line by line
struct Tokens<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    fn new(reader: R) -> Self {
        Tokens {
            reader,
            pending: VecDeque::new(),
        }
    }

    fn next<T: FromStr>(&mut self, field: &'static str) -> Result<T, InputError> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Err(InputError::UnexpectedEof { field });
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
        let token = self.pending.pop_front().unwrap_or_default();
        token
            .parse()
            .map_err(|_| InputError::InvalidNumber { field, token })
    }
}

/// Ask for and read the startup parameters.
/// Prompts and the control point diagnostic go to `out`.
pub fn read_setup<R: BufRead, W: Write>(
    reader: R,
    mut out: W,
    tangent_variant: bool,
) -> Result<Setup, InputError> {
    let mut tokens = Tokens::new(reader);

    writeln!(out, "Input Order of the Curve:")?;
    out.flush()?;
    let order: usize = tokens.next("order")?;

    writeln!(out, "Input Steps:")?;
    out.flush()?;
    let samples: usize = tokens.next("steps")?;

    let tangent_samples = if tangent_variant {
        writeln!(out, "Input Tangent Steps:")?;
        out.flush()?;
        Some(tokens.next::<usize>("tangent steps")?)
    } else {
        None
    };

    writeln!(out, "Input number of control points:")?;
    out.flush()?;
    let count: usize = tokens.next("control point count")?;

    let valid = count.checked_sub(1) == Some(order);
    writeln!(out, "Is Control Point Valid {}", u8::from(valid))?;
    if !valid {
        warn!(
            "a curve of order {} needs {} control points, {} announced",
            order,
            order.saturating_add(1),
            count
        );
    }

    let mut control_points = Vec::with_capacity(count);
    for _ in 0..count {
        let x: f64 = tokens.next("control point x")?;
        let y: f64 = tokens.next("control point y")?;
        control_points.push(Point2::new(x, y));
    }

    info!(
        "read curve of order {} with {} control points, {} steps",
        order, count, samples
    );
    Ok(Setup {
        order,
        samples,
        tangent_samples,
        control_points,
    })
}

/// Print curve points as `Point <i> : <x>, <y>`, counting from 0
pub fn write_points<W: Write>(mut out: W, points: &[Point2<f64>]) -> std::io::Result<()> {
    for (i, p) in points.iter().enumerate() {
        writeln!(out, "Point {} : {}, {}", i, p.x(), p.y())?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(input: &str, tangents: bool) -> (Result<Setup, InputError>, String) {
        let mut out = Vec::new();
        let setup = read_setup(input.as_bytes(), &mut out, tangents);
        (setup, String::from_utf8(out).unwrap())
    }

    #[test]
    fn reads_base_variant() {
        let (setup, out) = read("2\n4\n3\n0 0\n5 10\n10 0\n", false);
        let setup = setup.unwrap();
        assert_eq!(setup.order, 2);
        assert_eq!(setup.samples, 4);
        assert_eq!(setup.tangent_samples, None);
        assert_eq!(
            setup.control_points,
            vec![
                Point2::new(0.0, 0.0),
                Point2::new(5.0, 10.0),
                Point2::new(10.0, 0.0)
            ]
        );
        assert!(setup.is_control_point_count_valid());
        assert_eq!(
            out,
            "Input Order of the Curve:\nInput Steps:\nInput number of control points:\n\
             Is Control Point Valid 1\n"
        );
    }

    #[test]
    fn reads_tangent_variant_on_one_line() {
        let (setup, out) = read("1 10 5 2 0 0 10.5 -3", true);
        let setup = setup.unwrap();
        assert_eq!(setup.tangent_samples, Some(5));
        assert_eq!(setup.config(), CurveConfig::new(1, 10).with_tangents(5));
        assert_eq!(setup.control_points[1], Point2::new(10.5, -3.0));
        assert!(out.contains("Input Tangent Steps:\n"));
    }

    #[test]
    fn reports_count_mismatch() {
        let (setup, out) = read("3 10 2 0 0 1 1", false);
        assert!(!setup.unwrap().is_control_point_count_valid());
        assert!(out.ends_with("Is Control Point Valid 0\n"));
    }

    #[test]
    fn huge_order_is_reported_invalid() {
        let (setup, out) = read("18446744073709551615 4 0", false);
        let setup = setup.unwrap();
        assert_eq!(setup.order, usize::MAX);
        assert!(!setup.is_control_point_count_valid());
        assert!(out.ends_with("Is Control Point Valid 0\n"));
    }

    #[test]
    fn input_errors() {
        match read("3 10", false).0 {
            Err(InputError::UnexpectedEof { field }) => assert_eq!(field, "control point count"),
            other => panic!("unexpected {:?}", other),
        }
        match read("-1", false).0 {
            Err(InputError::InvalidNumber { field, token }) => {
                assert_eq!(field, "order");
                assert_eq!(token, "-1");
            }
            other => panic!("unexpected {:?}", other),
        }
        match read("1 2 2 0 zero", false).0 {
            Err(InputError::InvalidNumber { field, .. }) => assert_eq!(field, "control point y"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn prints_points() {
        let mut out = Vec::new();
        write_points(&mut out, &[Point2::new(1.0, 0.0), Point2::new(2.5, -4.0)]).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Point 0 : 1, 0\nPoint 1 : 2.5, -4\n"
        );
    }
}
