use std::fmt::{Display, Formatter};

/// Semantic label for one axis of a dataset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum AxisType {
    X,
    Y,
    Z,
    Channel,
    Time,
    Unknown,
    Custom(String),
}

impl Display for AxisType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            AxisType::X => write!(f, "X"),
            AxisType::Y => write!(f, "Y"),
            AxisType::Z => write!(f, "Z"),
            AxisType::Channel => write!(f, "Channel"),
            AxisType::Time => write!(f, "Time"),
            AxisType::Unknown => write!(f, "Unknown"),
            AxisType::Custom(name) => write!(f, "{name}"),
        }
    }
}

/// Conventional labels for a dataset of the given rank: X, Y, Z, Channel,
/// Time, then Unknown for any further axes.
pub fn default_axes(rank: usize) -> Vec<AxisType> {
    (0..rank)
        .map(|i| match i {
            0 => AxisType::X,
            1 => AxisType::Y,
            2 => AxisType::Z,
            3 => AxisType::Channel,
            4 => AxisType::Time,
            _ => AxisType::Unknown,
        })
        .collect()
}
