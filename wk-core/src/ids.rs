use rand::Rng;

/// Source of short entry ids.
pub trait IdGenerator: Send {
    fn next_id(&mut self) -> String;
}

/// Six lowercase hex characters from three random bytes.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIds;

impl IdGenerator for RandomIds {
    fn next_id(&mut self) -> String {
        let mut bytes = [0u8; 3];
        rand::thread_rng().fill(&mut bytes);
        hex::encode(bytes)
    }
}

/// `000001`, `000002`, ... Predictable ids for tests and fixtures.
#[derive(Debug, Clone, Default)]
pub struct SequentialIds {
    last: u32,
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> String {
        self.last += 1;
        format!("{:06x}", self.last)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_ids_are_six_hex_chars() {
        let mut ids = RandomIds;
        for _ in 0..50 {
            let id = ids.next_id();
            assert_eq!(id.len(), 6);
            assert!(id.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        }
    }

    #[test]
    fn sequential_ids_count_up() {
        let mut ids = SequentialIds::default();
        assert_eq!(ids.next_id(), "000001");
        assert_eq!(ids.next_id(), "000002");
    }
}
