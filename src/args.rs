use clap::Parser;

#[derive(Parser, Debug, Default)]
#[command(name = "roblox-analyzer", version, about = "Detailed statistics report for a single Roblox game")]
pub struct Args {
    /// Game link (https://www.roblox.com/games/<PlaceID>/...) or bare PlaceID. Prompted for when omitted.
    pub input: Option<String>,

    /// Print the whole description instead of the first characters
    #[arg(long)]
    pub full_description: bool,

    /// Save the JSON report without asking
    #[arg(long)]
    pub save: bool,

    /// Never prompt; unanswered questions default to no
    #[arg(long)]
    pub batch: bool,

    /// Log REST calls and pipeline steps to stderr
    #[arg(short, long)]
    pub verbose: bool,
}
