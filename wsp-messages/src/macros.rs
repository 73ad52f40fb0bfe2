/// Fill a message template.
///
/// ```
/// use wsp_messages::{msg, MESSAGES};
///
/// let text = msg!(MESSAGES.workspace.created, name = "demo");
/// assert!(text.contains("demo"));
/// ```
#[macro_export]
macro_rules! msg {
    ($template:expr) => {
        $crate::builder::MessageBuilder::new($template).build()
    };
    ($template:expr, $($key:ident = $value:expr),+ $(,)?) => {
        {
            let mut builder = $crate::builder::MessageBuilder::new($template);
            $(
                builder = builder.var(stringify!($key), $value);
            )+
            builder.build()
        }
    };
}
