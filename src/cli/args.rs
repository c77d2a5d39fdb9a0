use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "pons")]
#[command(about = "Interactive PONS dictionary lookup with a local response cache")]
#[command(version)]
pub struct Args {
    /// Dictionary to select at startup (e.g., ende, defr)
    #[arg(short = 'd', long = "dict")]
    pub dict: Option<String>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}
