use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::collections::HashMap;

const ADJECTIVES: &[&str] = &[
    "able", "amazing", "bold", "brave", "bright", "busy", "calm", "careful", "clever", "cool",
    "cosmic", "crisp", "curious", "daring", "eager", "easy", "fancy", "fast", "fine", "fond",
    "gentle", "glad", "golden", "grand", "happy", "hardy", "honest", "humble", "jolly", "keen",
    "kind", "lively", "loyal", "lucky", "merry", "mighty", "modest", "neat", "nice", "noble",
    "patient", "polite", "proud", "quick", "quiet", "rapid", "ready", "sharp", "smooth", "steady",
    "sunny", "swift", "tidy", "vivid", "warm", "wise", "witty", "young", "zesty", "zippy",
];

const NOUNS: &[&str] = &[
    "badger", "beagle", "bear", "beaver", "bison", "bobcat", "camel", "cat", "cheetah", "condor",
    "crab", "crane", "deer", "dingo", "dolphin", "eagle", "elk", "falcon", "ferret", "finch",
    "fox", "gecko", "gopher", "hawk", "heron", "ibex", "jackal", "jaguar", "koala", "lemur",
    "lion", "llama", "lynx", "marten", "mink", "moose", "newt", "ocelot", "orca", "osprey",
    "otter", "owl", "panda", "pelican", "puffin", "quail", "rabbit", "raven", "seal", "shark",
    "sloth", "snake", "stork", "swan", "tiger", "toad", "turtle", "walrus", "wombat", "zebra",
];

/// 換名前最多重抽幾次，之後改用數字後綴
const MAX_ATTEMPTS: usize = 64;

/// Produces lowercase two-word names such as `brave otter`.
pub trait NameGenerator {
    fn generate(&mut self) -> String;
}

pub struct PetnameGenerator {
    rng: StdRng,
}

impl PetnameGenerator {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }
}

impl NameGenerator for PetnameGenerator {
    fn generate(&mut self) -> String {
        let adjective = ADJECTIVES.choose(&mut self.rng).copied().unwrap_or("quiet");
        let noun = NOUNS.choose(&mut self.rng).copied().unwrap_or("otter");
        format!("{} {}", adjective, noun)
    }
}

pub fn title_case(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// 真實名稱 <-> 假名的雙向對照，同一次執行內固定不變
pub struct UsernameMapping<G: NameGenerator = PetnameGenerator> {
    generator: G,
    real_to_generated: HashMap<String, String>,
    generated_to_real: HashMap<String, String>,
}

impl UsernameMapping<PetnameGenerator> {
    pub fn new(seed: Option<u64>) -> Self {
        Self::with_generator(PetnameGenerator::new(seed))
    }
}

impl<G: NameGenerator> UsernameMapping<G> {
    pub fn with_generator(generator: G) -> Self {
        Self {
            generator,
            real_to_generated: HashMap::new(),
            generated_to_real: HashMap::new(),
        }
    }

    pub fn generated_name(&mut self, real_name: &str) -> String {
        if let Some(generated) = self.real_to_generated.get(real_name) {
            return generated.clone();
        }

        let generated = self.unused_name();
        tracing::debug!("Assigned pseudonym '{}'", generated);

        self.real_to_generated
            .insert(real_name.to_string(), generated.clone());
        self.generated_to_real
            .insert(generated.clone(), real_name.to_string());

        generated
    }

    /// 空字串與 `#` 開頭的頻道名稱原樣保留
    pub fn replace_usernames_in_text(&mut self, text: &str) -> String {
        if text.is_empty() || text.starts_with('#') {
            return text.to_string();
        }
        self.generated_name(text)
    }

    pub fn real_name(&self, generated: &str) -> Option<&str> {
        self.generated_to_real.get(generated).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.real_to_generated.len()
    }

    pub fn is_empty(&self) -> bool {
        self.real_to_generated.is_empty()
    }

    fn unused_name(&mut self) -> String {
        let mut candidate = title_case(&self.generator.generate());
        for _ in 0..MAX_ATTEMPTS {
            if !self.generated_to_real.contains_key(&candidate) {
                return candidate;
            }
            candidate = title_case(&self.generator.generate());
        }

        let mut suffix = 2;
        loop {
            let numbered = format!("{} {}", candidate, suffix);
            if !self.generated_to_real.contains_key(&numbered) {
                return numbered;
            }
            suffix += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedGenerator {
        names: Vec<&'static str>,
        next: usize,
    }

    impl NameGenerator for FixedGenerator {
        fn generate(&mut self) -> String {
            let name = self.names[self.next % self.names.len()];
            self.next += 1;
            name.to_string()
        }
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("brave otter"), "Brave Otter");
        assert_eq!(title_case("x"), "X");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_mapping_is_memoized() {
        let mut mapping = UsernameMapping::new(Some(7));
        let first = mapping.generated_name("alice");
        let again = mapping.generated_name("alice");

        assert_eq!(first, again);
        assert_eq!(mapping.len(), 1);
        assert_eq!(mapping.real_name(&first), Some("alice"));
    }

    #[test]
    fn test_generated_names_are_title_cased_pairs() {
        let mut mapping = UsernameMapping::new(Some(42));
        let name = mapping.generated_name("bob");
        let words: Vec<&str> = name.split(' ').collect();

        assert_eq!(words.len(), 2);
        for word in words {
            assert!(word.chars().next().unwrap().is_uppercase());
        }
    }

    #[test]
    fn test_same_seed_same_names() {
        let mut a = UsernameMapping::new(Some(1234));
        let mut b = UsernameMapping::new(Some(1234));
        for user in ["alice", "bob", "carol"] {
            assert_eq!(a.generated_name(user), b.generated_name(user));
        }
    }

    #[test]
    fn test_collisions_are_regenerated() {
        let generator = FixedGenerator {
            names: vec!["happy otter", "happy otter", "calm lynx"],
            next: 0,
        };
        let mut mapping = UsernameMapping::with_generator(generator);

        assert_eq!(mapping.generated_name("alice"), "Happy Otter");
        assert_eq!(mapping.generated_name("bob"), "Calm Lynx");
    }

    #[test]
    fn test_exhausted_generator_falls_back_to_suffix() {
        let generator = FixedGenerator {
            names: vec!["happy otter"],
            next: 0,
        };
        let mut mapping = UsernameMapping::with_generator(generator);

        assert_eq!(mapping.generated_name("alice"), "Happy Otter");
        assert_eq!(mapping.generated_name("bob"), "Happy Otter 2");
        assert_eq!(mapping.generated_name("carol"), "Happy Otter 3");
    }

    #[test]
    fn test_channels_and_empty_text_pass_through() {
        let mut mapping = UsernameMapping::new(Some(3));

        assert_eq!(mapping.replace_usernames_in_text(""), "");
        assert_eq!(mapping.replace_usernames_in_text("#general"), "#general");
        assert!(mapping.is_empty());

        let replaced = mapping.replace_usernames_in_text("dave");
        assert_ne!(replaced, "dave");
        assert_eq!(mapping.len(), 1);
    }
}
