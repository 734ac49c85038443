use std::sync::Once;
use tracing_subscriber::{layer::SubscriberExt, registry::Registry, EnvFilter};

use bitmask_rs::flag_enum;

static TRACING_INIT: Once = Once::new();

pub fn test_logger() {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::from_default_env();

        let layer = tracing_tree::HierarchicalLayer::default()
            .with_writer(std::io::stdout)
            .with_indent_lines(true)
            .with_indent_amount(2)
            .with_targets(true);

        let subscriber = Registry::default().with(layer).with(filter);

        tracing::subscriber::set_global_default(subscriber).unwrap();
    });
}

flag_enum! {
    pub enum Desc {
        SMALL = 1,
        ROUND = 1 << 1,
        FUNKY = 1 << 2,
        SONAR = 1 << 4,
    }
}

flag_enum! {
    pub enum Colors {
        TEAL = 1,
        PINK = 1 << 1,
        BLUE = 1 << 2,
    }
}
