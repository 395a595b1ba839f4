use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::Parser;
use interval_slider::{
    Color, ContinuousRangeWidget, Dp, IntervalSlider, Label, Px, PxRect, PxSize, SliderOption,
    ValueEntry,
};
use tracing::{info, info_span};

/// Lays out an interval slider headlessly and replays drags against it.
#[derive(Parser)]
#[command(name = "interval-slider-demo")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Stops as VALID:APPEARANCE[:LABEL], in table order
    #[arg(long = "stop", value_parser = parse_stop, required = true)]
    stops: Vec<StopArg>,
    /// Control width in pixels
    #[arg(long, default_value_t = 320)]
    width: i32,
    /// Control height in pixels
    #[arg(long, default_value_t = 100)]
    height: i32,
    /// Lower bound of the slider range (0 to 100)
    #[arg(long)]
    min: Option<f32>,
    /// Upper bound of the slider range (0 to 100)
    #[arg(long)]
    max: Option<f32>,
    /// Initial position, snapped to the nearest stop
    #[arg(long = "default")]
    default_value: Option<f32>,
    /// Gap between labels and the slider, in dp
    #[arg(long)]
    label_padding: Option<f64>,
    /// Draw a mark at every stop
    #[arg(long)]
    marks: bool,
    /// Raw positions at which to end a drag, replayed in order
    #[arg(long = "drag", allow_negative_numbers = true)]
    drags: Vec<f32>,
    /// Valid values to set programmatically after the drags
    #[arg(long = "set", allow_negative_numbers = true)]
    sets: Vec<f32>,
}

#[derive(Clone, Debug)]
struct StopArg {
    valid: f32,
    appearance: f32,
    label: Option<String>,
}

fn parse_stop(raw: &str) -> Result<StopArg> {
    let mut parts = raw.splitn(3, ':');
    let (Some(valid), Some(appearance)) = (parts.next(), parts.next()) else {
        bail!("expected VALID:APPEARANCE[:LABEL], got `{raw}`");
    };
    Ok(StopArg {
        valid: valid
            .trim()
            .parse()
            .with_context(|| format!("invalid valid value in `{raw}`"))?,
        appearance: appearance
            .trim()
            .parse()
            .with_context(|| format!("invalid appearance value in `{raw}`"))?,
        label: parts.next().map(str::to_owned),
    })
}

// Rough monospace estimate; real hosts measure shaped text.
fn measure_label(text: &str) -> PxSize {
    PxSize::new(Px(7 * text.chars().count() as i32), Px(14))
}

fn options(cli: &Cli) -> Vec<SliderOption> {
    let mut options = vec![
        SliderOption::AddMark(cli.marks),
        SliderOption::MinimumTrackTintColor(Color::from_rgba_u8(0x1e, 0x88, 0xe5, 0xff)),
    ];
    options.extend(cli.min.map(SliderOption::MinimumValue));
    options.extend(cli.max.map(SliderOption::MaximumValue));
    options.extend(cli.default_value.map(SliderOption::DefaultValue));
    options.extend(
        cli.label_padding
            .map(|padding| SliderOption::LabelBottomPadding(Dp(padding))),
    );
    options
}

fn print_layout(slider: &IntervalSlider) {
    println!("slider frame: {:?}", slider.widget().frame());
    for stop in slider.table() {
        let label = stop
            .label()
            .map(|label| format!("{:>8} at {:?}", label.text(), label.frame()))
            .unwrap_or_else(|| "(no label)".to_owned());
        let mark = stop
            .mark()
            .map(|mark| format!(", mark centre {:?}", mark.center()))
            .unwrap_or_default();
        println!(
            "  stop {:>6} @ {:>6}: {label}{mark}",
            stop.valid_value(),
            stop.appearance_value()
        );
    }
}

fn main() -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new("warn,interval_slider=info"))
        .context("failed to build log filter")?;
    tracing_subscriber::fmt()
        .pretty()
        .with_env_filter(filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .init();

    let cli = Cli::parse();
    let entries = cli
        .stops
        .iter()
        .map(|stop| {
            let entry = ValueEntry::new(stop.valid, stop.appearance);
            match stop.label.as_deref() {
                Some(text) => entry.with_label(Label::new(text, measure_label(text))),
                None => entry,
            }
        })
        .collect();

    let mut slider = IntervalSlider::new(
        PxRect::new(Px(0), Px(0), Px(cli.width), Px(cli.height)),
        entries,
        &options(&cli),
    )
    .context("failed to build interval slider")?;
    slider.set_on_confirm(|value: f32| info!("Confirmed value {value}"));

    print_layout(&slider);
    println!("initial value: {}", slider.value());

    for raw in &cli.drags {
        let _span = info_span!("drag", raw = *raw).entered();
        let confirmed = slider.on_drag_end(*raw);
        let mut frames = 0;
        while slider.widget_mut().advance(Duration::from_millis(16)) {
            frames += 1;
        }
        println!("drag ended at {raw:>7} -> {confirmed} (settled after {frames} frames)");
    }

    for value in &cli.sets {
        match slider.set_value(*value) {
            Ok(()) => println!("set {value} -> {}", slider.value()),
            Err(err) => println!("set {value} rejected: {err}"),
        }
    }

    let centre = slider.widget().frame().center();
    if slider.touch_down(centre) {
        let confirmed = slider.touch_up(centre);
        println!("tap at track centre -> {confirmed:?}");
    }

    Ok(())
}
