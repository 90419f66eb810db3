use chrono::{Duration, Local};
use rand::{Rng, seq::IndexedRandom};

const METHODS: [(&str, u8); 4] = [("GET", 6), ("POST", 2), ("PUT", 1), ("DELETE", 1)];
const PATHS: [(&str, u8); 6] = [
    ("/", 10),
    ("/login", 10),
    ("/api", 50),
    ("/admin", 5),
    ("/splash", 20),
    ("/gallery/", 10),
];
const STATUS: [(u16, u8); 6] = [
    (200, 50),
    (201, 10),
    (400, 10),
    (401, 20),
    (404, 50),
    (500, 5),
];
const USERS: [(&str, u8); 3] = [("-", 20), ("admin", 2), ("guest", 1)];
const AGENTS: [(&str, u8); 4] = [
    ("Mozilla/5.0 (X11; Linux x86_64)", 10),
    ("Mozilla/5.0 (Windows NT 10.0; Win64; x64)", 10),
    ("curl/8.5.0", 3),
    ("Googlebot/2.1 (+http://www.google.com/bot.html)", 1),
];
const MALFORMED: [&str; 4] = [
    "invalid line",
    "192.168.0.1 - -",
    "192.168.0.1 - - [01/Jan/2024:00:00:00 +0000] \"GET /api HTTP/1.1\" - -",
    "- - - [01/Jan/2024:00:00:00 +0000] \"GET / HTTP/1.1\" 200 1",
];

pub fn generate_access_log<R: Rng + ?Sized>(rng: &mut R) -> String {
    // A small address pool so rankings have something to rank.
    let ip = format!("192.168.{}.{}", rng.random_range(0..4), rng.random_range(0..32));
    let user = USERS.choose_weighted(rng, |(_, w)| *w).unwrap().0;
    let timestamp = (Local::now() - Duration::seconds(rng.random_range(0..86_400)))
        .format("%d/%b/%Y:%H:%M:%S %z");
    let method = METHODS.choose_weighted(rng, |(_, w)| *w).unwrap().0;
    let path = PATHS.choose_weighted(rng, |(_, w)| *w).unwrap().0;
    let status = STATUS.choose_weighted(rng, |(_, w)| *w).unwrap().0;
    let size = rng.random_range(100..2000);
    let agent = AGENTS.choose_weighted(rng, |(_, w)| *w).unwrap().0;

    format!("{ip} - {user} [{timestamp}] \"{method} {path} HTTP/1.1\" {status} {size} \"-\" \"{agent}\"")
}

pub fn generate_malformed_line<R: Rng + ?Sized>(rng: &mut R) -> String {
    MALFORMED.choose(rng).unwrap().to_string()
}
