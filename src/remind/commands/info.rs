use super::{CmdMessage, CmdResult};
use crate::config::RemindConfig;
use crate::error::Result;

pub fn run(config: &RemindConfig) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!(
        "PATH:{}",
        config.notes_root.display()
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_the_notes_root() {
        let config = RemindConfig::with_root("/tmp/notes");
        let result = run(&config).unwrap();
        assert_eq!(result.messages[0].content, "PATH:/tmp/notes");
    }
}
