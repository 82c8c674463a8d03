use crate::dto::stats::DisciplinePerformance;
use crate::models::DisciplineStats;

/// `value/total` as a one-decimal percentage string. Zero-safe: a zero total
/// yields "0.0" instead of dividing.
pub fn rate(value: u32, total: u32) -> String {
    if total == 0 {
        "0.0".to_string()
    } else {
        format!("{:.1}", f64::from(value) / f64::from(total) * 100.0)
    }
}

/// Win/podium rates and non-podium finish count for one discipline.
///
/// Counters with `podiums > races` are a data-quality defect; they are logged
/// and passed through unclamped so the upstream bug stays visible
/// (`other_results` goes negative in that case).
pub fn discipline_performance(stats: &DisciplineStats) -> DisciplinePerformance {
    if stats.podiums > stats.races {
        tracing::warn!(
            podiums = stats.podiums,
            races = stats.races,
            "discipline counters report more podiums than races"
        );
    }

    DisciplinePerformance {
        win_rate: rate(stats.wins, stats.races),
        podium_rate: rate(stats.podiums, stats.races),
        other_results: i64::from(stats.races) - i64::from(stats.podiums),
    }
}
