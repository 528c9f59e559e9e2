pub(crate) const HELP_NAME: &str = "help";
pub(crate) const HELP_SHORT: &str = "h";
pub(crate) const VERSION_NAME: &str = "version";
pub(crate) const VERSION_SHORT: &str = "v";

pub(crate) const COMMANDS_HEADER: &str = "The following commands are available:";
pub(crate) const PARAMETERS_HEADER: &str = "The following parameters are available:";
pub(crate) const BLANK_LINE: &str = " ";
