use pingala::{
    Direction, Evaluator, FrameIndex, SceneConfig, WeightSequence, pingala_reconstruct,
    reconstruct_trace,
};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(std::io::stderr)
        .init();

    let pattern: WeightSequence = "L L G L L G G G".parse()?;
    for step in reconstruct_trace(pattern.symbols(), Direction::RightToLeft) {
        println!("#{} {}: {} -> {}", step.index, step.symbol, step.before, step.after);
    }

    let timeline = pingala_reconstruct(
        pattern.symbols(),
        Direction::RightToLeft,
        &SceneConfig::default(),
    )?;
    let last = FrameIndex(timeline.duration.0 - 1);
    let snap = Evaluator::snapshot(&timeline, last)?;
    println!(
        "{} frames; accumulator at the end = {:?}",
        timeline.duration.0,
        snap.element("accumulator").and_then(|e| e.state.value)
    );
    Ok(())
}
