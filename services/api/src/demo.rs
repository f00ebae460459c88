use std::sync::Arc;

use clap::Args;
use satsoil::error::AppError;
use satsoil::i18n::{translate, Language};
use satsoil::showcase::blueprint::{
    dd_report_sections, featured_plots, market_alerts, portfolio_holdings, FarmDossier,
};
use satsoil::showcase::search::{FarmGenerator, FarmSearchResult};
use satsoil::showcase::session::{FarmId, Section, SessionService};

use crate::infra::{CollectingNoticePublisher, TracingMapWidget};

#[derive(Args, Debug, Default)]
pub(crate) struct SearchArgs {
    /// Pin the generator for reproducible output
    #[arg(long)]
    pub(crate) seed: Option<u64>,
    /// Heading language (ja or en)
    #[arg(long)]
    pub(crate) lang: Option<String>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Pin the generator for reproducible output
    #[arg(long)]
    pub(crate) seed: Option<u64>,
    /// Interface language for localized headings (ja or en)
    #[arg(long)]
    pub(crate) lang: Option<String>,
    /// Print the full 26-row result sheet instead of the first five
    #[arg(long)]
    pub(crate) list_results: bool,
    /// Skip the invest-flow portion of the walk-through
    #[arg(long)]
    pub(crate) skip_invest: bool,
}

fn parse_lang(raw: Option<String>) -> Result<Language, AppError> {
    match raw {
        Some(code) => Ok(code.parse::<Language>()?),
        None => Ok(Language::Ja),
    }
}

fn heading(lang: Language, key: &str, fallback: &str) -> String {
    translate(lang, key).unwrap_or(fallback).to_string()
}

fn build_generator(seed: Option<u64>) -> FarmGenerator {
    match seed {
        Some(seed) => FarmGenerator::with_seed(seed),
        None => FarmGenerator::new(),
    }
}

fn print_result_rows(rows: &[FarmSearchResult]) {
    for row in rows {
        println!(
            "- {} | {} | pH {:.1} | soil {:.1} | rotation {} | potential {} | {} ({}) | risk {}",
            row.name,
            row.region,
            row.soil_ph,
            row.soil_score,
            row.rotation_score,
            row.potential_score,
            row.crop.label(),
            row.roi,
            row.risk.label()
        );
    }
}

pub(crate) fn run_search_sheet(args: SearchArgs) -> Result<(), AppError> {
    let SearchArgs { seed, lang } = args;
    let lang = parse_lang(lang)?;

    println!("{}", heading(lang, "section.search.title", "Farm Search"));
    let results = build_generator(seed).generate();
    print_result_rows(&results);
    println!("{} rows", results.len());
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        seed,
        lang,
        list_results,
        skip_invest,
    } = args;
    let lang = parse_lang(lang)?;

    let notices = Arc::new(CollectingNoticePublisher::default());
    let map = Arc::new(TracingMapWidget);
    let session = Arc::new(SessionService::with_generator(
        notices.clone(),
        map,
        lang,
        build_generator(seed),
    ));

    println!("SATSOIL showcase demo");

    // Dashboard.
    println!("\n{}", heading(lang, "section.home.recommended", "Featured Farms"));
    for plot in featured_plots() {
        let anchor = plot.polygon[0];
        println!(
            "- {} @ ({:.4}, {:.4}) | ROI {} | {}",
            plot.title, anchor.lat, anchor.lon, plot.projected_roi, plot.risk_caption
        );
    }

    println!("\n{}", heading(lang, "section.home.alerts", "Latest Market Reports"));
    for alert in market_alerts() {
        println!("- {}: {}", alert.published_on.format("%Y/%m/%d"), alert.text);
    }

    // Mock search.
    session.select_section(Section::Search);
    let results = session.run_search();
    println!("\n{}", heading(lang, "section.search.title", "Farm Search"));
    if list_results {
        print_result_rows(&results);
    } else {
        print_result_rows(&results[..5]);
        println!("... {} rows total", results.len());
    }

    // Showcased farm detail.
    session.select_farm_card(FarmId("farmA".to_string()));
    let dossier = FarmDossier::farm_a();
    println!("\n{} ({})", dossier.display_name, dossier.location);
    println!(
        "- {} ha | {} | potential score {}",
        dossier.area_ha, dossier.owner, dossier.potential_score
    );
    for indicator in &dossier.risk_indicators {
        println!("- {}: {}", indicator.label, indicator.level.label());
    }
    println!("- NDVI {:.2}", dossier.average_ndvi);

    println!("\n{}", heading(lang, "section.detail.simulation", "Investment Simulation"));
    for line in &dossier.simulation {
        println!("- {}: {}", line.label, line.delta);
    }
    println!("=> {}", dossier.projected_roi_total);

    // DD report round trip.
    session.open_dd_report();
    println!("\n{}", heading(lang, "section.ddReport.title", "DD Report"));
    for section in dd_report_sections() {
        println!("{}", section.heading);
        for line in section.lines {
            println!("  {}", line);
        }
    }
    session.back();

    // Invest flow prompts.
    if !skip_invest {
        session.open_invest_flow();
        println!("\n{}", heading(lang, "section.investFlow.title", "Investment Process"));
        for step_key in ["identity", "contract", "amount", "payment"] {
            if let Some(notice) = session.trigger_invest_step(step_key) {
                println!("- {}", notice.message());
            }
        }
        session.back();
    }

    // Watchlist feedback.
    println!("\n{}", heading(lang, "section.mypage.title", "Investment Portfolio"));
    println!("- {}", session.add_to_watchlist("Farm A").message());
    println!("- {}", session.add_to_watchlist("Farm A").message());
    if let Some(notice) = session.remove_from_watchlist("Farm A") {
        println!("- {}", notice.message());
    }
    session.add_to_watchlist("Farm B");

    for holding in portfolio_holdings() {
        println!(
            "- {} | invested {} yen | current {} yen | ROI {}",
            holding.farm_name, holding.invested_yen, holding.current_value_yen, holding.projected_roi
        );
    }

    let snapshot = session.snapshot();
    println!(
        "\nSession: view {} | language {} | {} watched | {} notices",
        snapshot.active_view.label(),
        snapshot.language,
        snapshot.watchlist.len(),
        notices.events().len()
    );

    Ok(())
}
