//! CLI command definitions

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use wellness_domain::{
    AgeRange, BodyType, Budget, CulturalPreference, OutfitRequest, OutputFormat, SkinConcern,
    SkinType, SkincareProfile, Weather,
};

/// CLI arguments for wellness-guide
#[derive(Parser, Debug)]
#[command(name = "wellness-guide")]
#[command(author, version, about = "Women's health assistant with skincare and style advisors")]
#[command(long_about = r#"
Wellness Guide answers women's health questions in a safe, judgment-free
chat and offers two advisors: a personalized skincare routine and outfit
suggestions for an occasion.

Configuration files are loaded from (in priority order):
1. --config <path>       Explicit config file
2. ./wellness.toml       Project-level config
3. ~/.config/wellness-guide/config.toml   Global config

Example:
  wellness-guide chat
  wellness-guide ask "How can I manage period pain naturally?"
  wellness-guide skincare --skin-type oily --concern acne-breakouts --age 20s
  wellness-guide outfit --occasion "job interview" --weather rainy
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Output format: text or json (defaults to the config file, then text)
    #[arg(long, global = true, value_name = "FORMAT")]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Skip the simulated response latency
    #[arg(long, global = true)]
    pub no_delay: bool,

    /// Append the conversation transcript (JSONL) to this file
    #[arg(long, global = true, value_name = "PATH")]
    pub conversation_log: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Chat with the health assistant
    Chat,

    /// Ask a single question and print the reply
    Ask {
        /// The question to ask
        question: String,
    },

    /// Get a personalized skincare routine
    Skincare(SkincareArgs),

    /// Get outfit suggestions for an occasion
    Outfit(OutfitArgs),
}

#[derive(Args, Debug, Clone)]
pub struct SkincareArgs {
    /// oily, dry, combination, normal or sensitive
    #[arg(long, value_name = "TYPE")]
    pub skin_type: Option<SkinType>,

    /// Skin concern (repeatable), e.g. acne-breakouts, dark-spots
    #[arg(long = "concern", value_name = "CONCERN")]
    pub concerns: Vec<SkinConcern>,

    /// teens, 20s, 30s or 40s+
    #[arg(long = "age", value_name = "RANGE")]
    pub age_range: Option<AgeRange>,

    /// budget, mid or premium
    #[arg(long, value_name = "LEVEL")]
    pub budget: Option<Budget>,
}

impl SkincareArgs {
    pub fn to_profile(&self) -> SkincareProfile {
        let mut profile = SkincareProfile {
            skin_type: self.skin_type,
            age_range: self.age_range,
            budget: self.budget,
            ..SkincareProfile::default()
        };
        for concern in &self.concerns {
            profile.set_concern(*concern, true);
        }
        profile
    }
}

#[derive(Args, Debug, Clone)]
pub struct OutfitArgs {
    /// Describe the occasion, e.g. "job interview at a tech company"
    #[arg(long)]
    pub occasion: String,

    /// pear, apple, hourglass, rectangle, inverted-triangle or prefer-not-to-say
    #[arg(long, value_name = "TYPE")]
    pub body_type: Option<BodyType>,

    /// hot-sunny, warm-mild, cool-breezy, cold-winter or rainy
    #[arg(long, value_name = "WEATHER")]
    pub weather: Option<Weather>,

    /// Style preference, e.g. western, modest-conservative, minimalist
    #[arg(long = "style", value_name = "STYLE")]
    pub cultural_preference: Option<CulturalPreference>,
}

impl OutfitArgs {
    pub fn to_request(&self) -> OutfitRequest {
        OutfitRequest {
            occasion: self.occasion.clone(),
            body_type: self.body_type,
            weather: self.weather,
            cultural_preference: self.cultural_preference,
        }
    }
}
