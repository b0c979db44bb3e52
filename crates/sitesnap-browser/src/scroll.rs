//! The scroll-convergence loop.
//!
//! Pages that load content lazily keep growing after the initial render.
//! To capture the full page we probe `document.body.scrollHeight`, and as
//! long as consecutive probes disagree we scroll to the bottom, give the
//! page time to load, and probe again. Convergence means two consecutive
//! reads were equal.
//!
//! The loop is bounded: a feed that keeps growing (or whose height
//! oscillates) stops after `max_rounds` scroll cycles at the last observed
//! height instead of hanging the run.

use crate::error::Result;
use crate::page::PageSurface;
use crate::wait::Sleeper;
use std::time::Duration;
use tracing::{debug, warn};

/// Scrolls `surface` until its content height stops changing and returns
/// the final height.
///
/// Performs a baseline height read first; each round then re-reads the
/// height, stops if it matches the previous observation, and otherwise
/// scrolls to the bottom and sleeps `scroll_delay` before the next round.
///
/// # Errors
///
/// Propagates the first height-probe or scroll failure.
pub async fn converge_content_height<P, S>(
    surface: &P,
    sleeper: &S,
    scroll_delay: Duration,
    max_rounds: u32,
) -> Result<i64>
where
    P: PageSurface + ?Sized,
    S: Sleeper + ?Sized,
{
    let mut last = surface.content_height().await?;

    for round in 0..max_rounds {
        let current = surface.content_height().await?;
        if current == last {
            debug!(height = current, rounds = round, "content height converged");
            return Ok(current);
        }

        last = current;
        surface.scroll_to_bottom().await?;
        sleeper.sleep(scroll_delay).await;
    }

    warn!(
        max_rounds,
        height = last,
        "content height still changing after scroll round cap, capturing at last observed height"
    );
    Ok(last)
}
