//! Utility to compute a BMI and its alerts from the command line
//!
//! Usage: bmi_check <weight> <kg|lbs> <height> <cm|ft> [age]

use wellcheck::alerts::{evaluate, AlertKind};
use wellcheck::config::Config;
use wellcheck::health::{bmi_result_message, calculate_bmi, daily_calorie_needs, BmiMode};
use wellcheck::measure::{parse_decimal, parse_whole_number, Height, HeightUnit, Weight, WeightUnit};
use wellcheck::models::HealthProfile;

const USAGE: &str = "Usage: bmi_check <weight> <kg|lbs> <height> <cm|ft> [age]";

/// Profile from the arguments, with BMI calculated. Age is 0 when not given.
fn profile_from_args(args: &[String], mode: BmiMode) -> Result<HealthProfile, Box<dyn std::error::Error>> {
    if args.len() != 4 && args.len() != 5 {
        return Err(USAGE.into());
    }

    let weight = Weight::new(parse_decimal(&args[0]), WeightUnit::from_str(&args[1])?);
    let height = Height::new(parse_decimal(&args[2]), HeightUnit::from_str(&args[3])?);
    if !height.is_set() {
        return Err("Height must be greater than zero".into());
    }
    let age = args.get(4).map(|a| parse_whole_number(a)).unwrap_or(0);

    Ok(HealthProfile {
        age,
        height,
        weight,
        bmi: Some(calculate_bmi(&weight, &height, mode)),
        ..HealthProfile::default()
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() != 4 && args.len() != 5 {
        eprintln!("{}", USAGE);
        std::process::exit(2);
    }

    let config = Config::from_env()?;
    let profile = profile_from_args(&args, config.bmi_mode)?;
    let Some(reading) = profile.bmi else {
        return Err("BMI could not be calculated".into());
    };

    println!("Weight: {}", profile.weight);
    println!("Height: {}", profile.height);
    println!("BMI ({}): {} ({})", config.bmi_mode.as_str(), reading.value, reading.category.as_str());
    println!("  {}", bmi_result_message(reading.category));

    if config.bmi_mode == BmiMode::AsEntered && profile.weight.unit == WeightUnit::Pounds {
        let metric = calculate_bmi(&profile.weight, &profile.height, BmiMode::Metric);
        println!("BMI (metric): {} ({})", metric.value, metric.category.as_str());
    }

    let calories = daily_calorie_needs(&profile);
    if profile.age == 0 {
        println!("Daily calories: {} (no age given)", calories);
    } else {
        println!("Daily calories: {} (age {}, moderately active)", calories, profile.age);
    }

    for alert in evaluate(&profile) {
        let marker = match alert.kind {
            AlertKind::Critical => "!!",
            AlertKind::Warning => "!",
            AlertKind::Info => "-",
        };
        println!("{} {}: {}", marker, alert.title, alert.message);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wellcheck::health::DEFAULT_DAILY_CALORIES;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_age_feeds_calorie_estimate() {
        let profile = profile_from_args(&args(&["70", "kg", "175", "cm", "30"]), BmiMode::AsEntered).unwrap();
        assert_eq!(profile.age, 30);
        assert_ne!(daily_calorie_needs(&profile), DEFAULT_DAILY_CALORIES);
    }

    #[test]
    fn test_missing_age_uses_default_calories() {
        let profile = profile_from_args(&args(&["70", "kg", "175", "cm"]), BmiMode::AsEntered).unwrap();
        assert_eq!(profile.age, 0);
        assert_eq!(daily_calorie_needs(&profile), DEFAULT_DAILY_CALORIES);
    }

    #[test]
    fn test_bad_arguments() {
        assert!(profile_from_args(&args(&["70", "kg"]), BmiMode::AsEntered).is_err());
        assert!(profile_from_args(&args(&["70", "stone", "175", "cm"]), BmiMode::AsEntered).is_err());
        assert!(profile_from_args(&args(&["70", "kg", "0", "cm"]), BmiMode::AsEntered).is_err());
    }
}
