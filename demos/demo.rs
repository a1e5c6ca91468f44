use slot_ringbuf::RawRingbuf;
use slot_ringbuf::Status;
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_CAPACITY: usize = 9;
const DEFAULT_PUSHES: usize = 10;

const VECTOR_SIZE: usize = 3 * std::mem::size_of::<u32>();

#[derive(Debug, Clone)]
pub struct DemoSettings {
    capacity: usize,
    pushes: usize,
}

#[derive(Default)]
pub struct DemoSettingsBuilder {
    capacity: Option<usize>,
    pushes: Option<usize>,
}

impl DemoSettingsBuilder {
    pub fn new() -> Self {
        DemoSettingsBuilder::default()
    }

    /// Apply the `RINGBUF_CAPACITY` and `RINGBUF_PUSHES` environment
    /// variables, ignoring values that do not parse.
    pub fn with_env(mut self) -> Self {
        if let Some(capacity) = env_usize("RINGBUF_CAPACITY") {
            self.capacity = Some(capacity);
        }
        if let Some(pushes) = env_usize("RINGBUF_PUSHES") {
            self.pushes = Some(pushes);
        }
        self
    }

    /// Set the number of vectors the ring buffer can hold.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = Some(capacity);
        self
    }

    /// Set how many vectors are pushed, and then popped.
    pub fn pushes(mut self, pushes: usize) -> Self {
        self.pushes = Some(pushes);
        self
    }

    pub fn build(self) -> DemoSettings {
        DemoSettings {
            capacity: self.capacity.unwrap_or(DEFAULT_CAPACITY),
            pushes: self.pushes.unwrap_or(DEFAULT_PUSHES),
        }
    }
}

fn env_usize(key: &str) -> Option<usize> {
    std::env::var(key).ok()?.parse().ok()
}

fn encode_vector(i: u32, j: u32, k: u32) -> [u8; VECTOR_SIZE] {
    let mut bytes = [0u8; VECTOR_SIZE];
    bytes[0..4].copy_from_slice(&i.to_ne_bytes());
    bytes[4..8].copy_from_slice(&j.to_ne_bytes());
    bytes[8..12].copy_from_slice(&k.to_ne_bytes());
    bytes
}

fn decode_vector(bytes: &[u8; VECTOR_SIZE]) -> (u32, u32, u32) {
    let field = |at: usize| {
        u32::from_ne_bytes([
            bytes[at],
            bytes[at + 1],
            bytes[at + 2],
            bytes[at + 3],
        ])
    };

    (field(0), field(4), field(8))
}

fn main() -> slot_ringbuf::error::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let settings = DemoSettingsBuilder::new().with_env().build();
    info!("demo settings: {:?}", settings);

    let mut storage = vec![0u8; settings.capacity * VECTOR_SIZE];
    let mut ringbuf = RawRingbuf::new(&mut storage, VECTOR_SIZE)?;

    for n in 0..settings.pushes as u32 {
        let vector = encode_vector(n, n + 1, n + 2);
        if ringbuf.push(&vector)?.is_overwritten() {
            println!("Overwritten!");
        }
    }

    let mut vector = [0u8; VECTOR_SIZE];
    for _ in 0..settings.pushes {
        match ringbuf.pop(&mut vector)? {
            Status::Empty => println!("Empty!"),
            _ => {
                let (i, j, k) = decode_vector(&vector);
                println!("i: {} j: {} k: {}", i, j, k);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::DemoSettingsBuilder;
    use super::DEFAULT_CAPACITY;
    use super::DEFAULT_PUSHES;

    #[test]
    fn test_default_settings() {
        let settings = DemoSettingsBuilder::new().build();

        assert_eq!(settings.capacity, DEFAULT_CAPACITY);
        assert_eq!(settings.pushes, DEFAULT_PUSHES);
    }

    #[test]
    fn test_settings() {
        let settings = DemoSettingsBuilder::new().capacity(4).pushes(6).build();

        assert_eq!(settings.capacity, 4);
        assert_eq!(settings.pushes, 6);
    }
}
