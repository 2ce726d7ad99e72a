use std::fmt;
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use slider::constants::*;
use slider::dom::Element;
use slider::page::PageBuilder;
use slider::{App, Direction, InitialIndex, SliderConfig};

/// One scripted click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Navigate(Direction),
    Slide(usize),
}

impl FromStr for Step {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(index) = s.strip_prefix("slide:") {
            return index
                .parse()
                .map(Step::Slide)
                .map_err(|_| format!("invalid slide index in '{}'", s));
        }
        s.parse::<Direction>().map(Step::Navigate).map_err(|e| e.to_string())
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Navigate(direction) => write!(f, "{}", direction),
            Step::Slide(index) => write!(f, "slide:{}", index),
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "slider", version, about = "Cycle a set of slides with previous/next controls")]
struct Args {
    /// Number of slides on the demo page
    #[arg(long, default_value_t = 3)]
    slides: usize,

    /// Leave the previous button out of the page
    #[arg(long)]
    no_prev: bool,

    /// Leave the next button out of the page
    #[arg(long)]
    no_next: bool,

    /// Slide already marked active in the page markup
    #[arg(long, value_name = "K")]
    preactive: Option<usize>,

    /// Initial slide, wrapped into range (negative counts from the end)
    #[arg(long, allow_negative_numbers = true, conflicts_with_all = ["first", "random"])]
    initial: Option<i64>,

    /// Always start on the first slide
    #[arg(long, conflicts_with = "random")]
    first: bool,

    /// Start on a random slide among the first three
    #[arg(long)]
    random: bool,

    /// Do not make the slides themselves clickable
    #[arg(long)]
    no_slide_clicks: bool,

    #[arg(long, default_value = SLIDE_SELECTOR)]
    slide_selector: String,

    #[arg(long, default_value = PREV_SELECTOR)]
    prev_selector: String,

    #[arg(long, default_value = NEXT_SELECTOR)]
    next_selector: String,

    #[arg(long, default_value = ACTIVE_CLASS)]
    active_class: String,

    /// Open a window showing the images of this directory instead of running steps
    #[cfg(feature = "window")]
    #[arg(long, value_name = "DIR")]
    images: Option<std::path::PathBuf>,

    /// Clicks to replay: next, prev, slide:<n>
    steps: Vec<Step>,
}

impl Args {
    fn config(&self) -> SliderConfig {
        let initial = if self.first {
            InitialIndex::First
        } else if self.random {
            InitialIndex::Random
        } else {
            InitialIndex::Fixed(self.initial.unwrap_or(0))
        };

        SliderConfig {
            slide_selector: self.slide_selector.clone(),
            active_class: self.active_class.clone(),
            prev_selector: self.prev_selector.clone(),
            next_selector: self.next_selector.clone(),
            control_index: CONTROL_INDEX,
            initial,
            slide_clicks: !self.no_slide_clicks,
        }
    }
}

fn report(label: &str, current: Option<usize>) {
    match current {
        Some(index) => println!("{} -> active slide {}", label, index),
        None => println!("{} -> no active slide", label),
    }
}

fn run_script(args: &Args, config: SliderConfig) -> Result<()> {
    let mut page = PageBuilder::for_config(args.slides, &config)
        .context("the demo page needs class selectors")?;
    if args.no_prev {
        page = page.without_prev();
    }
    if args.no_next {
        page = page.without_next();
    }
    if let Some(index) = args.preactive {
        page = page.preactive(index);
    }

    let document = page.build();
    let mount = App::mount(&document, config);
    document.finish_loading();
    let app = mount.app().context("slider did not start")?;
    report("start", app.current());

    for step in &args.steps {
        let target: Option<Element> = match step {
            Step::Navigate(direction) => app.control(*direction).element().cloned(),
            Step::Slide(index) => app.manager().borrow().slides().get(*index).cloned(),
        };
        match target {
            Some(element) => element.click(),
            None => {
                warn!("Nothing to click for step '{}'", step);
                continue;
            }
        }
        report(&step.to_string(), app.current());
    }

    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = args.config();

    #[cfg(feature = "window")]
    if let Some(dir) = &args.images {
        return slider::window::run(dir, config);
    }

    run_script(&args, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_steps() {
        assert_eq!("next".parse::<Step>(), Ok(Step::Navigate(Direction::Next)));
        assert_eq!("prev".parse::<Step>(), Ok(Step::Navigate(Direction::Previous)));
        assert_eq!("slide:2".parse::<Step>(), Ok(Step::Slide(2)));
        assert!("slide:x".parse::<Step>().is_err());
        assert!("jump".parse::<Step>().is_err());
        assert_eq!(Step::Slide(4).to_string(), "slide:4");
    }

    #[test]
    fn flags_map_onto_config() {
        let args =
            Args::try_parse_from(["slider", "--initial", "-1", "--no-slide-clicks", "next"])
                .unwrap();
        let config = args.config();
        assert_eq!(config.initial, InitialIndex::Fixed(-1));
        assert!(!config.slide_clicks);
        assert_eq!(args.steps, vec![Step::Navigate(Direction::Next)]);

        let args = Args::try_parse_from(["slider", "--random"]).unwrap();
        assert_eq!(args.config().initial, InitialIndex::Random);

        assert!(Args::try_parse_from(["slider", "--first", "--random"]).is_err());
    }

    #[test]
    fn script_runs_with_missing_controls() {
        let argv = ["slider", "--slides", "0", "--no-prev", "next", "prev", "slide:1"];
        let args = Args::try_parse_from(argv).unwrap();
        let config = args.config();
        assert!(run_script(&args, config).is_ok());
    }

    #[test]
    fn script_builds_the_page_from_selector_overrides() {
        let argv = ["slider", "--slide-selector", ".slide", "--next-selector", ".forward", "next"];
        let args = Args::try_parse_from(argv).unwrap();
        let config = args.config();
        assert!(run_script(&args, config).is_ok());

        let argv = ["slider", "--slide-selector", "div.slide", "next"];
        let args = Args::try_parse_from(argv).unwrap();
        let config = args.config();
        assert!(run_script(&args, config).is_err());
    }
}
