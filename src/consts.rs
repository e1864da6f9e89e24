pub mod cli_consts {
    //! Dashboard Configuration Constants

    use std::time::Duration;

    /// The maximum number of events to keep in the activity log.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Capacity of the channel carrying log records into the UI.
    pub const EVENT_QUEUE_SIZE: usize = 100;

    /// How long the splash screen stays up unless a key is pressed.
    pub const SPLASH_DURATION: Duration = Duration::from_secs(2);

    /// Key poll timeout, which is also the animation tick.
    pub const TICK_RATE: Duration = Duration::from_millis(100);

    /// Ticks for the stats strip to count up to its final values.
    pub const STAT_ANIMATION_TICKS: usize = 10;

    /// Data types listed per table row before collapsing into "+N".
    pub const TABLE_DATA_TYPES_SHOWN: usize = 2;

    /// Directory under `$HOME` holding the config file.
    pub const CONFIG_DIR: &str = ".consent-dashboard";

    pub const CONFIG_FILE: &str = "config.json";
}
