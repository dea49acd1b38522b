//! Text provider for line-based `x,y,z` point lists.
//!
//! Each non-blank line holds one point as three comma-separated integers.
//! Points keep their line order, which fixes the indices the forest builders
//! report.

use std::io::BufRead;
use std::num::ParseIntError;

use junction_core::Point;
use thiserror::Error;
use tracing::debug;

/// Errors raised while reading a point list.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PointProviderError {
    /// The input held no points.
    #[error("input contains no points")]
    EmptyInput,
    /// A line could not be parsed as a point.
    #[error("line {line}: {reason}")]
    InvalidLine {
        /// 1-based line number of the offending line.
        line: usize,
        /// What was wrong with it.
        reason: LineError,
    },
    /// Reading from the underlying source failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Reasons a single line fails to parse.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[non_exhaustive]
pub enum LineError {
    /// The line did not split into exactly three fields.
    #[error("expected 3 comma-separated coordinates but found {found}")]
    FieldCount {
        /// Number of fields present.
        found: usize,
    },
    /// A coordinate was not an `i32`.
    #[error("coordinate `{raw}` is not a valid integer: {source}")]
    Coordinate {
        /// The raw text of the coordinate.
        raw: String,
        /// Underlying parse failure.
        #[source]
        source: ParseIntError,
    },
}

/// Ordered points loaded from a text source.
#[derive(Clone, Debug)]
pub struct PointProvider {
    name: String,
    points: Vec<Point>,
}

impl PointProvider {
    /// Wraps an already-parsed point list.
    ///
    /// # Errors
    /// Returns [`PointProviderError::EmptyInput`] when `points` is empty.
    ///
    /// # Examples
    /// ```
    /// use junction_core::Point;
    /// use junction_providers_text::PointProvider;
    ///
    /// let provider = PointProvider::new("demo", vec![Point::new(1, 2, 3)])?;
    /// assert_eq!(provider.len(), 1);
    /// # Ok::<(), junction_providers_text::PointProviderError>(())
    /// ```
    pub fn new(name: impl Into<String>, points: Vec<Point>) -> Result<Self, PointProviderError> {
        if points.is_empty() {
            return Err(PointProviderError::EmptyInput);
        }
        Ok(Self {
            name: name.into(),
            points,
        })
    }

    /// Reads one point per line from `reader`, skipping blank lines.
    ///
    /// # Errors
    /// Returns [`PointProviderError::InvalidLine`] for the first malformed
    /// line, [`PointProviderError::EmptyInput`] when no points were read, and
    /// [`PointProviderError::Io`] when the reader fails.
    ///
    /// # Examples
    /// ```
    /// use std::io::Cursor;
    /// use junction_core::Point;
    /// use junction_providers_text::PointProvider;
    ///
    /// let provider = PointProvider::try_from_reader("demo", Cursor::new("1,2,3\n\n-4,5,6\n"))?;
    /// assert_eq!(provider.points(), [Point::new(1, 2, 3), Point::new(-4, 5, 6)]);
    /// # Ok::<(), junction_providers_text::PointProviderError>(())
    /// ```
    pub fn try_from_reader<R: BufRead>(
        name: impl Into<String>,
        reader: R,
    ) -> Result<Self, PointProviderError> {
        let name = name.into();
        let mut points = Vec::new();
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            let point = parse_point(trimmed).map_err(|reason| PointProviderError::InvalidLine {
                line: index + 1,
                reason,
            })?;
            points.push(point);
        }
        debug!(data_source = %name, points = points.len(), "parsed point list");
        Self::new(name, points)
    }

    /// Returns the data source name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the points in input order.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Returns the number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns whether the provider holds no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Consumes the provider and returns its points.
    #[must_use]
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }
}

fn parse_point(line: &str) -> Result<Point, LineError> {
    let fields: Vec<&str> = line.split(',').collect();
    let [x, y, z] = fields.as_slice() else {
        return Err(LineError::FieldCount {
            found: fields.len(),
        });
    };
    Ok(Point::new(
        parse_coordinate(x)?,
        parse_coordinate(y)?,
        parse_coordinate(z)?,
    ))
}

fn parse_coordinate(raw: &str) -> Result<i32, LineError> {
    raw.trim()
        .parse()
        .map_err(|source| LineError::Coordinate {
            raw: raw.to_owned(),
            source,
        })
}
