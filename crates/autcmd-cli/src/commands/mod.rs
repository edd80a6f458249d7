pub mod json;
pub mod pair;
pub mod render;

use clap::Args;

use autcmd_core::{Direction, Options, Order};

/// `--direction` / `--order`, at most one of them
#[derive(Debug, Args)]
pub struct OptionArgs {
    /// Direction for simulation and reduction (forward|backward, or a table token)
    #[arg(long, conflicts_with = "order")]
    pub direction: Option<Direction>,

    /// Order for equivalence and inclusion (lexicographic|depth_first|breadth_first)
    #[arg(long)]
    pub order: Option<Order>,
}

impl OptionArgs {
    pub fn options(&self) -> Option<Options> {
        match (self.direction, self.order) {
            (Some(direction), _) => Some(Options::Direction(direction)),
            (None, Some(order)) => Some(Options::Order(order)),
            (None, None) => None,
        }
    }
}
