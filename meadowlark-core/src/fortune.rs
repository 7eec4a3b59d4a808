use rand::seq::SliceRandom;

const FORTUNES: [&str; 5] = [
    "Conquer your fears or they will conquer you.",
    "Rivers need springs.",
    "Do not fear what you don't know.",
    "You will have a pleasant surprise.",
    "Whenever possible, keep it simple.",
];

/// One random fortune cookie for the about page.
pub fn get_fortune() -> &'static str {
    let mut rng = rand::thread_rng();
    FORTUNES.choose(&mut rng).copied().unwrap_or(FORTUNES[0])
}
