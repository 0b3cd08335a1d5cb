use chrono::Utc;
use walltime::{DateTime, Duration, Time};

fn main() {
    let now = DateTime::from_utc(Utc::now());
    let meeting = DateTime::from_iso_str("2026-10-19T09:30+02:00").expect("valid date-time");
    let lunch: Time = "12:15".parse().expect("valid time");

    println!("now (UTC):     {now}");
    println!("meeting (UTC): {meeting}");
    println!("lunch + 90s:   {}", lunch + Duration::from_seconds(90));
    println!("a day later:   {}", meeting.add_hours(24));
}
