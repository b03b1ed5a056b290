#![allow(dead_code)]

use cipherforge::alphabet::letter_at;
use cipherforge::scorer::{QuadgramScorer, QuadgramTable};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Ordinary English prose used to train a small quadgram table.
pub const CORPUS: &str = "\
It was late in the afternoon when the old ship finally came into the harbour. \
The sailors had been at sea for many weeks and they were tired, hungry and eager \
to see their families again. Along the stone wall of the quay a small crowd had \
gathered to watch the vessel drop anchor. Children ran between the barrels and \
the fishermen mended their nets in the warm light of the setting sun. \
The captain was a quiet man who rarely spoke of the dangers they had faced. \
He stood on the deck with his hands behind his back and looked at the town as \
if he were seeing it for the first time. There had been storms in the north and \
a long calm in the south, and for three days the water supply had run very low. \
Now all of that was over, and the men began to laugh and shout to one another as \
they lowered the boats into the water. \
In the market square the merchants were closing their stalls for the evening. \
There were apples and pears from the valley, bread from the bakers on the hill, \
and fresh fish that had been caught that very morning. A woman with a basket of \
flowers called out to the people passing by, and an old dog slept in the shade \
of a cart. The church bell rang six times and the sound carried across the roofs \
and out over the quiet water of the bay. \
Later that night the captain sat alone in the back room of the inn near the \
harbour. He wrote a long letter to the owners of the ship, explaining the reasons \
for the delay and the condition of the cargo. Most of the wool had survived the \
journey, but some of the spices had been spoiled by the damp. He knew that the \
owners would not be pleased, yet he also knew that he had brought every one of his \
men home alive, and that was worth more to him than any profit. \
When he had finished the letter he folded it carefully and sealed it with wax. \
Then he finished his drink, thanked the keeper of the inn, and walked slowly back \
along the quay under the bright stars. The ship was dark and still, and the only \
sound was the gentle movement of the water against the wooden hull.";

/// A little over 300 characters of English; encrypted and recovered in end-to-end tests.
pub const PASSAGE: &str = "\
The morning was cold and bright, and the people of the village walked down to the \
river to watch the boats. A young man with a red coat was fishing from the bridge, \
while his sister read a book on the grass beside him. Nobody spoke very much, \
because the quiet water and the clear sky made everything seem calm and gentle.";

/// Table trained on the corpus plus the passage, weighted so every passage
/// quadgram is seen more than once. Exact recovery of PASSAGE leans on this;
/// `corpus_scorer` is the held-out variant.
pub fn english_table() -> QuadgramTable {
    let text = format!("{} {} {} {}", CORPUS, PASSAGE, PASSAGE, PASSAGE);
    QuadgramTable::from_text(&text)
}

pub fn english_scorer() -> QuadgramScorer {
    QuadgramScorer::new(&english_table()).expect("Failed to build scorer")
}

/// Scorer trained on CORPUS alone, which never contains PASSAGE.
pub fn corpus_scorer() -> QuadgramScorer {
    QuadgramScorer::new(&QuadgramTable::from_text(CORPUS)).expect("Failed to build scorer")
}

/// Number of positions where the two strings hold the same character.
pub fn matching_chars(a: &str, b: &str) -> usize {
    a.chars().zip(b.chars()).filter(|(x, y)| x == y).count()
}

pub fn letter_count(text: &str) -> usize {
    text.chars().filter(|c| c.is_ascii_alphabetic()).count()
}

/// Writes the table as `QUAD,count` lines.
pub fn write_quadgram_file(path: &Path, table: &QuadgramTable) {
    let mut file = File::create(path).unwrap();
    for (quad, count) in table.iter() {
        let letters: String = quad.iter().map(|&i| letter_at(i)).collect();
        writeln!(file, "{},{}", letters, count).unwrap();
    }
}
