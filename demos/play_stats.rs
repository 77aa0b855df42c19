//! Play Statistics Example
//!
//! Builds a small play log by hand, runs the aggregation pass, and prints
//! the full metric table the way a collection screen would consume it.
//!
//! Run with: cargo run --example play_stats

use chrono::NaiveDate;
use meeple_stats::{average_rating, AggregateContext, PlayLog, PlayRecord, PlayerRecord};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid demo date")
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== Meeple-Stats Play Statistics ===\n");

    // -------------------------------------------------------------------------
    // 1. Build the ordered play log (the data store's job in production)
    // -------------------------------------------------------------------------
    println!("1. Building play log...");

    let mut log = PlayLog::new();
    log.push(PlayRecord::builder(1, date(2019, 11, 2)).quantity(2).player_count(4).duration(110).build());
    log.push(PlayRecord::builder(2, date(2019, 12, 26)).quantity(3).player_count(3).build());
    log.push(PlayRecord::builder(3, date(2020, 1, 18)).player_count(4).duration(75).build());
    log.push(PlayRecord::builder(4, date(2020, 2, 14)).quantity(2).player_count(2).duration(95).build());
    log.push(PlayRecord::builder(5, date(2020, 3, 7)).incomplete(true).build());

    log.attach_players(vec![
        PlayerRecord::builder(1, "Alice").username("alice42").win(true).score("57").build(),
        PlayerRecord::builder(1, "Bob").username("bob").score("41").build(),
        PlayerRecord::builder(3, "Alice").username("alice42").score("48").build(),
        PlayerRecord::builder(3, "Carol").win(true).score("57").build(),
        PlayerRecord::builder(4, "Bob").username("bob").win(true).score("Resigned").build(),
    ])?;

    println!("   {} play records, {} total plays logged", log.len(), 9);

    // -------------------------------------------------------------------------
    // 2. Aggregate with the out-of-band inputs
    // -------------------------------------------------------------------------
    println!("\n2. Aggregating...");

    let rating = average_rating(&[8.0, 0.0, 7.0]).unwrap_or(0.0);
    let ctx = AggregateContext::new("alice42", date(2020, 6, 1))
        .with_nominal_playing_time(90)
        .with_rating(rating);
    let stats = log.aggregate(&ctx);

    // -------------------------------------------------------------------------
    // 3. Read the snapshot
    // -------------------------------------------------------------------------
    println!("\n3. Results\n");

    println!("   Play count:        {}", stats.play_count());
    println!("   Incomplete plays:  {}", stats.incomplete_play_count());
    println!("   This year:         {}", stats.play_count_this_year());
    for player_count in 1..=stats.max_player_count() {
        let quantity = stats.play_count_with(player_count);
        if quantity > 0 {
            println!("   {player_count}-player plays:    {quantity}");
        }
    }
    println!("   Months played:     {}", stats.months_played());
    println!("   Play rate:         {:.2} plays/month", stats.play_rate());

    println!("\n   First play:        {:?}", stats.first_play_date());
    println!("   Nickel:            {:?}", stats.nickel_date());
    println!("   Dime:              {:?}", stats.dime_date());
    println!("   Last play:         {:?}", stats.last_play_date());

    println!("\n   Hours played:      {:.1}", stats.hours_played());
    println!("   Average length:    {:.0} min", stats.average_play_time());
    println!("   Per player:        {:.0} min", stats.average_play_time_per_player());

    if stats.has_wins() {
        println!("\n   Win percentage:    {:.1}%", stats.win_percentage().unwrap() * 100.0);
        println!("   Win skill:         {}", stats.win_skill().unwrap());
    }

    if stats.has_scores() {
        println!("\n   Average score:     {:.2}", stats.average_score().unwrap());
        println!(
            "   High score:        {} by {}",
            stats.high_score().unwrap(),
            stats.high_scorers().join(", ")
        );
        println!(
            "   Low score:         {} by {}",
            stats.low_score().unwrap(),
            stats.low_scorers().join(", ")
        );
        if let Some(personal) = stats.personal_average_score() {
            println!("   Personal average:  {personal:.2}");
        }
    }

    println!("\n   Utilization:       {:.1}%", stats.utilization() * 100.0);
    println!("   FHM:               {}", stats.fhm());
    println!("   HHM:               {}", stats.hhm());
    println!("   RUHM:              {:.3}", stats.ruhm());
    println!("   Whitemore:         {}", stats.whitemore_score());
    println!("   Zefquaavius:       {:.3}", stats.zefquaavius_score());

    Ok(())
}
