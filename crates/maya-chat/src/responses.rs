//! Canned response tables consulted by the selector.
//!
//! Built once at startup and shared read-only between sessions.

use std::collections::HashMap;

use maya_core::ResponsePair;

// =============================================================================
// Table types
// =============================================================================

/// Fixed pools of replies, keyed by the situation they answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CannedPool {
    /// First turn of every session.
    Greeting,
    /// Positive sentiment.
    Enthusiastic,
    /// Negative sentiment.
    Supportive,
    /// Question with no targeted answer.
    InterestingQuestion,
    /// "How are you" style questions.
    WellBeing,
    /// "I understand / tell me more".
    Generic,
    /// Blank input.
    EmptyPrompt,
    /// Internal fault.
    LastResort,
}

/// A reply set unlocked when the previous bot line contained one of `cues`
/// and the new input carries `topic`.
#[derive(Debug, Clone)]
pub struct FollowUpTrigger {
    pub cues: Vec<String>,
    pub topic: String,
    pub replies: Vec<ResponsePair>,
}

/// A fixed answer to a question word combined with a subject.
///
/// The subject is satisfied by the extractor's topic tag or by any of the
/// subject phrases appearing in the input.
#[derive(Debug, Clone)]
pub struct TargetedAnswer {
    pub question_words: Vec<String>,
    pub topic: Option<String>,
    pub subjects: Vec<String>,
    pub reply: ResponsePair,
}

/// Replies that keep the conversation on an established topic.
#[derive(Debug, Clone)]
pub struct TopicContinuation {
    pub topic: String,
    pub replies: Vec<ResponsePair>,
}

#[derive(Debug, Clone, Default)]
pub struct ResponseBook {
    pub pools: HashMap<CannedPool, Vec<ResponsePair>>,
    pub follow_ups: Vec<FollowUpTrigger>,
    /// Tried in order; the first match wins.
    pub targeted: Vec<TargetedAnswer>,
    pub well_being_cues: Vec<String>,
    pub continuations: Vec<TopicContinuation>,
    /// Used for a current topic without its own continuation table.
    pub fallback_continuation: Vec<ResponsePair>,
}

impl ResponseBook {
    pub fn pool(&self, pool: CannedPool) -> &[ResponsePair] {
        self.pools.get(&pool).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn continuation(&self, topic: &str) -> &[ResponsePair] {
        self.continuations
            .iter()
            .find(|c| c.topic == topic)
            .map(|c| c.replies.as_slice())
            .unwrap_or(&self.fallback_continuation)
    }

    /// Text of the first last-resort reply.
    pub fn last_resort(&self) -> ResponsePair {
        self.pool(CannedPool::LastResort)
            .first()
            .cloned()
            .unwrap_or_else(|| {
                ResponsePair::new(
                    "Maaf, saya tidak faham. Boleh ulang?",
                    "Sorry, I don't understand. Can you repeat?",
                )
            })
    }
}

// =============================================================================
// Built-in tables
// =============================================================================

fn rp(native: &str, translation: &str, pronunciation: &str) -> ResponsePair {
    ResponsePair::new(native, translation).with_pronunciation(pronunciation)
}

fn plain(native: &str, translation: &str) -> ResponsePair {
    ResponsePair::new(native, translation)
}

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|w| (*w).to_string()).collect()
}

impl ResponseBook {
    pub fn builtin() -> Self {
        let mut pools = HashMap::new();
        pools.insert(
            CannedPool::Greeting,
            vec![
                rp(
                    "Apa khabar? Saya Maya! Siapa nama anda?",
                    "How are you? I'm Maya! What's your name?",
                    "ah-pah kah-bar? sah-yah MY-ah!",
                ),
                rp(
                    "Selamat datang! Bagaimana hari anda?",
                    "Welcome! How is your day?",
                    "seh-lah-mat dah-tang!",
                ),
                rp(
                    "Hai! Senang berjumpa dengan anda!",
                    "Hi! Nice to meet you!",
                    "high! seh-nang ber-joom-pah",
                ),
                rp(
                    "Assalamualaikum! Apa khabar? Sudah makan?",
                    "Peace be upon you! How are you? Have you eaten?",
                    "ah-sah-lah-mu-ah-lai-kum!",
                ),
            ],
        );
        pools.insert(
            CannedPool::Enthusiastic,
            vec![
                rp(
                    "Wah shiok! Saya sangat gembira dengar tu lah!",
                    "Wow, great! I'm so happy to hear that!",
                    "wah shiok!",
                ),
                rp(
                    "Eh best leh! Berita yang fantastik!",
                    "Eh, that's the best! Fantastic news!",
                    "eh best leh!",
                ),
                rp("Steady lah! Teruskan usaha!", "Steady! Keep it up!", "steady lah!"),
                rp(
                    "Alamak bagus sangat! Saya teruja untuk awak!",
                    "Wow, so good! I'm excited for you!",
                    "ah-lah-mak bah-goos!",
                ),
            ],
        );
        pools.insert(
            CannedPool::Supportive,
            vec![
                rp(
                    "Aiyah, jangan risau lah! Semua akan okay.",
                    "Aiyah, don't worry! Everything will be okay.",
                    "aiyah, jah-ngan ree-sau!",
                ),
                rp(
                    "Haiya, takpe! Esok akan lebih baik!",
                    "Never mind! Tomorrow will be better!",
                    "haiya, tak-peh!",
                ),
                rp(
                    "Sian... tapi awak boleh atasi! Saya percaya pada awak!",
                    "Poor thing... but you can overcome it! I believe in you!",
                    "see-an... tah-pee boh-leh",
                ),
                plain(
                    "Eh jangan putus asa! Kadang-kadang macam tu, tapi akan jadi lebih baik!",
                    "Don't give up! Sometimes it's like that, but it will get better!",
                ),
            ],
        );
        pools.insert(
            CannedPool::InterestingQuestion,
            vec![rp(
                "Hmm, soalan yang menarik! Cerita lagi sikit tentang apa yang awak fikir?",
                "Hmm, interesting question! Tell me more about what you're thinking?",
                "hmm, meh-nah-rik!",
            )],
        );
        pools.insert(
            CannedPool::WellBeing,
            vec![
                rp(
                    "Khabar baik, terima kasih! Awak pula macam mana?",
                    "I'm fine, thank you! How about you?",
                    "kah-bar bah-ik, teh-ree-mah kah-seh!",
                ),
                rp(
                    "Saya sihat, alhamdulillah! Hari awak okay?",
                    "I'm well, thank God! Is your day okay?",
                    "sah-yah see-hat!",
                ),
            ],
        );
        pools.insert(
            CannedPool::Generic,
            vec![
                rp(
                    "Saya faham. Apa lagi yang anda nak kongsi?",
                    "I understand. What else do you want to share?",
                    "sah-yah fah-ham",
                ),
                rp(
                    "Menarik! Boleh cerita lebih lanjut?",
                    "Interesting! Can you tell me more?",
                    "meh-nah-rik!",
                ),
                rp(
                    "Oh begitu. Apa pendapat anda?",
                    "Oh I see. What's your opinion?",
                    "oh beh-gee-too",
                ),
            ],
        );
        pools.insert(
            CannedPool::EmptyPrompt,
            vec![plain(
                "Sila cakap sesuatu. Saya sedang mendengar!",
                "Please say something. I'm listening!",
            )],
        );
        pools.insert(
            CannedPool::LastResort,
            vec![plain(
                "Maaf, saya tidak faham. Boleh ulang?",
                "Sorry, I don't understand. Can you repeat?",
            )],
        );

        let follow_ups = vec![
            FollowUpTrigger {
                cues: words(&["suka apa", "anda suka apa", "awak suka apa"]),
                topic: "food".to_string(),
                replies: vec![
                    rp(
                        "Wah, sedap tu! Saya pun suka. Kat mana awak selalu makan?",
                        "Wow, that's delicious! I like it too. Where do you usually eat?",
                        "wah, seh-dap too!",
                    ),
                    rp(
                        "Eh shiok leh! Makanan Singapore memang best. Ada lagi tak yang awak suka?",
                        "That's great! Singapore food really is the best. Anything else you like?",
                        "eh shiok leh!",
                    ),
                    rp(
                        "Betul ke? Saya pun suka tu! Kopitiam mana yang best untuk makanan tu?",
                        "Really? I like that too! Which kopitiam is best for it?",
                        "beh-tool keh?",
                    ),
                ],
            },
            FollowUpTrigger {
                cues: words(&["singapore", "mrt", "orchard"]),
                topic: "location".to_string(),
                replies: vec![
                    rp(
                        "Singapore memang best! Sangat senang nak ke mana-mana kan?",
                        "Singapore really is the best! Very easy to get anywhere, right?",
                        "sin-gah-por meh-mang best!",
                    ),
                    rp(
                        "Ya lor, sebab tu saya suka Singapore! Semua tersusun.",
                        "Yes, that's why I love Singapore! Everything is so organised.",
                        "ya lor!",
                    ),
                    rp(
                        "Betul betul! Singapore tempat yang sangat shiok untuk tinggal!",
                        "True! Singapore is a really good place to live!",
                        "beh-tool beh-tool!",
                    ),
                ],
            },
        ];

        let targeted = vec![
            TargetedAnswer {
                question_words: words(&["apa", "what"]),
                topic: Some("food".to_string()),
                subjects: words(&["makan", "food"]),
                reply: rp(
                    "Saya cadangkan chicken rice! Sangat terkenal kat Singapore. Awak nak cuba?",
                    "I recommend chicken rice! Very famous in Singapore. Want to try?",
                    "chicken rice!",
                ),
            },
            TargetedAnswer {
                question_words: words(&["apa", "what"]),
                topic: None,
                subjects: words(&["kerja", "work", "job"]),
                reply: rp(
                    "Saya kerja sebagai chatbot! Tolong orang belajar Melayu. Awak kerja apa?",
                    "I work as a chatbot! I help people learn Malay. What's your job?",
                    "sah-yah ker-jah seh-bah-gai chatbot!",
                ),
            },
            TargetedAnswer {
                question_words: words(&["siapa", "who"]),
                topic: None,
                subjects: words(&["nama", "name", "awak", "anda", "you"]),
                reply: rp(
                    "Nama saya Maya! Saya kawan belajar bahasa Melayu awak.",
                    "My name is Maya! I'm your Malay practice buddy.",
                    "nah-mah sah-yah MY-ah!",
                ),
            },
            TargetedAnswer {
                question_words: words(&["mana", "where"]),
                topic: Some("food".to_string()),
                subjects: words(&["makan", "eat"]),
                reply: rp(
                    "Cuba pergi hawker centre atau kopitiam! Kat mana-mana di Singapore ada makanan sedap.",
                    "Try a hawker centre or kopitiam! There's good food everywhere in Singapore.",
                    "hawker centre!",
                ),
            },
            TargetedAnswer {
                question_words: words(&["mana", "where"]),
                topic: None,
                subjects: words(&["pergi", "go"]),
                reply: rp(
                    "Bergantung awak nak buat apa! Membeli-belah, Orchard Road. Pantai, Sentosa!",
                    "Depends what you want to do! Shopping, Orchard Road. Beach, Sentosa!",
                    "ber-gan-tong ah-wak nak!",
                ),
            },
        ];

        let continuations = vec![
            TopicContinuation {
                topic: "food".to_string(),
                replies: vec![
                    rp(
                        "Topik makanan sangat menarik! Apa hidangan Singapore yang paling awak suka?",
                        "Food is a great topic! What's your favourite Singapore dish?",
                        "to-pik mah-kah-nan!",
                    ),
                    rp(
                        "Cakap pasal makanan buat saya lapar! Awak dah makan ke belum?",
                        "Talking about food makes me hungry! Have you eaten yet?",
                        "chah-kap pah-sal mah-kah-nan!",
                    ),
                    rp(
                        "Budaya makanan Singapore sangat pelbagai kan? Ada Melayu, Cina, India...",
                        "Singapore food culture is so diverse, right? Malay, Chinese, Indian...",
                        "boo-dah-yah mah-kah-nan!",
                    ),
                ],
            },
            TopicContinuation {
                topic: "location".to_string(),
                replies: vec![
                    rp(
                        "Singapore ada banyak tempat yang cantik! Kawasan mana yang awak paling suka?",
                        "Singapore has many beautiful places! Which area do you like most?",
                        "sin-gah-por ah-dah bah-nyak!",
                    ),
                    rp(
                        "Setiap sudut Singapore ada benda istimewa!",
                        "Every corner of Singapore has something special!",
                        "seh-tee-ap soo-dut!",
                    ),
                ],
            },
            TopicContinuation {
                topic: "family".to_string(),
                replies: vec![
                    rp(
                        "Keluarga memang penting! Awak selalu buat apa dengan keluarga?",
                        "Family is really important! What do you usually do with your family?",
                        "keh-loo-ar-gah!",
                    ),
                    plain(
                        "Seronok dengar pasal keluarga awak! Cerita lagi!",
                        "Nice to hear about your family! Tell me more!",
                    ),
                ],
            },
            TopicContinuation {
                topic: "learning".to_string(),
                replies: vec![
                    rp(
                        "Bagus! Teruskan belajar bahasa Melayu!",
                        "Good! Keep learning Malay!",
                        "bah-goos! teh-roos-kan beh-lah-jar",
                    ),
                    rp(
                        "Anda dah pandai! Jangan malu untuk cuba!",
                        "You're getting good! Don't be shy to try!",
                        "an-dah dah pan-dai!",
                    ),
                ],
            },
        ];

        let fallback_continuation = vec![
            rp(
                "Itu point yang bagus! Apa awak fikir tentang tu?",
                "That's a good point! What do you think about it?",
                "point yang bah-goos!",
            ),
            rp(
                "Topik yang menarik! Boleh kongsi lagi pengalaman awak?",
                "Interesting topic! Can you share more about your experience?",
                "to-pik yang meh-nah-rik!",
            ),
        ];

        Self {
            pools,
            follow_ups,
            targeted,
            well_being_cues: words(&[
                "apa khabar",
                "khabar baik",
                "how are you",
                "sihat",
                "macam mana awak",
            ]),
            continuations,
            fallback_continuation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_pools_non_empty() {
        let book = ResponseBook::builtin();
        for pool in [
            CannedPool::Greeting,
            CannedPool::Enthusiastic,
            CannedPool::Supportive,
            CannedPool::InterestingQuestion,
            CannedPool::WellBeing,
            CannedPool::Generic,
            CannedPool::EmptyPrompt,
            CannedPool::LastResort,
        ] {
            let replies = book.pool(pool);
            assert!(!replies.is_empty(), "{:?} is empty", pool);
            assert!(replies.iter().all(|r| !r.is_blank()));
        }
    }

    #[test]
    fn test_missing_pool_is_empty_slice() {
        let book = ResponseBook::default();
        assert!(book.pool(CannedPool::Greeting).is_empty());
    }

    #[test]
    fn test_continuation_lookup_and_fallback() {
        let book = ResponseBook::builtin();
        assert_eq!(book.continuation("food").len(), 3);
        assert_eq!(
            book.continuation("cultural"),
            book.fallback_continuation.as_slice()
        );
    }

    #[test]
    fn test_last_resort_default_when_pool_missing() {
        let book = ResponseBook::default();
        let reply = book.last_resort();
        assert!(!reply.is_blank());
        assert_eq!(
            ResponseBook::builtin().last_resort().native,
            "Maaf, saya tidak faham. Boleh ulang?"
        );
    }

    #[test]
    fn test_follow_up_topics() {
        let book = ResponseBook::builtin();
        let topics: Vec<&str> = book.follow_ups.iter().map(|f| f.topic.as_str()).collect();
        assert_eq!(topics, vec!["food", "location"]);
    }
}
