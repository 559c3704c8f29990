use std::path::Path;
use std::time::Duration;

use colored::Colorize;

use arcana_core::SpreadKind;
use arcana_reading::reveal::driver;
use arcana_reading::{
    DrawConfig, DrawEngine, DrawRequest, Reading, ReadingArchive, RevealConfig, RevealController,
    RevealPhase, RevealSnapshot, UserProfile,
};

use crate::DrawArgs;

pub fn run(dir: &Path, args: &DrawArgs) -> Result<(), String> {
    let mut store = super::open_store(dir);
    let profile =
        UserProfile::load(&store).map_err(|e| format!("cannot read profile: {e}"))?;

    let spread_id = args
        .spread
        .clone()
        .or_else(|| profile.favourite_spread.map(|k| k.id().to_string()))
        .unwrap_or_else(|| SpreadKind::ThreeCard.id().to_string());

    let mut request = DrawRequest::new();
    if let Some(question) = &args.question {
        request = request.with_question(question);
    }
    if let Some(querent) = profile.querent() {
        request = request.with_querent(querent);
    }

    let mut config = DrawConfig::default();
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    let mut engine = DrawEngine::new(config);
    let reading = engine
        .draw(&spread_id, &request)
        .map_err(|e| e.to_string())?;

    super::print_header(&reading);
    let controller = reveal(&reading, reveal_config(args))?;
    log::debug!("reveal finished in {:?}", controller.now());

    println!();
    super::print_summary(&reading);

    if args.save {
        ReadingArchive::new(&mut store)
            .save(&reading)
            .map_err(|e| format!("could not save reading: {e}"))?;
        println!();
        println!("  Saved reading {}", reading.id.to_string().bold());
    }

    Ok(())
}

fn reveal_config(args: &DrawArgs) -> RevealConfig {
    if args.instant {
        return RevealConfig::instant().with_auto_reveal(!args.no_auto_reveal);
    }
    RevealConfig::default()
        .with_shuffle_duration(Duration::from_millis(args.shuffle_ms))
        .with_pre_reveal_delay(Duration::from_millis(args.pre_reveal_ms))
        .with_reveal_interval(Duration::from_millis(args.interval_ms))
        .with_auto_reveal(!args.no_auto_reveal)
}

/// Play the reveal in real time, narrating each phase.
fn reveal(reading: &Reading, config: RevealConfig) -> Result<RevealController, String> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .map_err(|e| format!("cannot start timer runtime: {e}"))?;

    let mut controller = RevealController::new(config);
    controller.start_revealing(reading);
    println!("  {}", "Shuffling the deck...".dimmed());

    let mut shown = 0;
    let end = runtime.block_on(driver::play(&mut controller, |snapshot: &RevealSnapshot| {
        match snapshot.phase {
            RevealPhase::Drawing => {
                println!("  {}", format!("Dealing {} cards...", reading.len()).dimmed());
            }
            RevealPhase::Revealing | RevealPhase::Complete => {
                while shown < snapshot.cursor {
                    super::print_card(reading, shown, true);
                    shown += 1;
                }
            }
            RevealPhase::Idle | RevealPhase::Shuffling => {}
        }
    }));

    if end != RevealPhase::Complete {
        println!("  {}", "Cards are face down. Turning them all.".dimmed());
        controller.reveal_all_cards();
        for index in shown..reading.len() {
            super::print_card(reading, index, true);
        }
    }
    Ok(controller)
}
