use clap::Parser;

use crate::{infrastructure::tui::real::rate_period, utils::version};

#[derive(Parser, Debug)]
#[command(author, version = version(), about)]
pub struct Cli {
    #[arg(
        short,
        long,
        value_name = "FLOAT",
        value_parser = positive_rate,
        help = "Tick rate, i.e. number of ticks per second",
        default_value_t = 4.0
    )]
    pub tick_rate: f64,

    #[arg(
        short,
        long,
        value_name = "FLOAT",
        value_parser = positive_rate,
        help = "Frame rate, i.e. number of frames per second",
        default_value_t = 30.0
    )]
    pub frame_rate: f64,
}

/// Events per second; the resulting period must be a non-zero `Duration`
fn positive_rate(raw: &str) -> Result<f64, String> {
    let rate: f64 = raw
        .parse()
        .map_err(|_| format!("`{raw}` is not a number"))?;
    if !rate.is_finite() || rate <= 0.0 {
        return Err(format!("`{raw}` must be a finite number greater than 0"));
    }
    rate_period(rate)
        .map(|_| rate)
        .ok_or_else(|| format!("`{raw}` is too large"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["tvremote"]);
        assert_eq!(cli.tick_rate, 4.0);
        assert_eq!(cli.frame_rate, 30.0);
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::parse_from(["tvremote", "--tick-rate", "10", "-f", "60"]);
        assert_eq!(cli.tick_rate, 10.0);
        assert_eq!(cli.frame_rate, 60.0);
    }

    #[test]
    fn test_fractional_rate() {
        let cli = Cli::parse_from(["tvremote", "--tick-rate", "0.5"]);
        assert_eq!(cli.tick_rate, 0.5);
    }

    #[rstest]
    #[case("--tick-rate", "0")]
    #[case("--tick-rate", "-5")]
    #[case("--tick-rate", "NaN")]
    #[case("--tick-rate", "inf")]
    #[case("--frame-rate", "0")]
    #[case("--frame-rate", "-5")]
    #[case("--frame-rate", "NaN")]
    #[case("--frame-rate", "1e300")]
    #[case("--frame-rate", "fast")]
    fn test_rejects_rates_without_a_usable_period(#[case] flag: &str, #[case] value: &str) {
        let arg = format!("{flag}={value}");
        assert!(Cli::try_parse_from(["tvremote", arg.as_str()]).is_err());
    }

    #[rstest]
    #[case("4")]
    #[case("0.25")]
    #[case("1000")]
    fn test_accepted_rates_have_a_period(#[case] value: &str) -> Result<(), String> {
        let rate = positive_rate(value)?;
        assert!(rate_period(rate).is_some());
        Ok(())
    }
}
