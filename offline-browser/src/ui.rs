//! Static pages for the toolbar strip and the start page.

/// The toolbar is its own small page. Buttons post [`Command`] JSON over IPC;
/// Rust updates the address field through `setAddress`.
///
/// [`Command`]: crate::models::Command
pub const TOOLBAR_HTML: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="UTF-8">
<style>
  * { margin:0; padding:0; box-sizing:border-box; }
  html, body { height:100%; overflow:hidden; background:#f3f3f3; }
  body {
    display:flex;
    align-items:center;
    gap:6px;
    padding:0 8px;
    border-bottom:1px solid #d0d0d0;
    font-family:system-ui, sans-serif;
    font-size:13px;
  }
  button {
    background:#fff;
    border:1px solid #c8c8c8;
    border-radius:4px;
    padding:4px 10px;
    cursor:pointer;
    flex-shrink:0;
  }
  button:hover { background:#e8e8e8; }
  #address {
    flex:1;
    border:1px solid #c8c8c8;
    border-radius:4px;
    padding:5px 8px;
    font-family:inherit;
    outline:none;
  }
  #address:focus { border-color:#6a8fd8; }
</style>
</head>
<body>
  <button onclick="send({cmd:'back'})">Back</button>
  <button onclick="send({cmd:'forward'})">Forward</button>
  <button onclick="send({cmd:'reload'})">Reload</button>
  <input id="address" type="text" spellcheck="false"
    placeholder="Relative path, file or web address"
    onkeydown="if(event.key==='Enter'){ go(); }" />
  <button onclick="go()">Go</button>
  <button onclick="send({cmd:'load_offline_site'})">Load Offline Site</button>

  <script>
    function send(message) {
      window.ipc.postMessage(JSON.stringify(message));
    }

    function go() {
      send({cmd:'go', text: document.getElementById('address').value });
    }

    function setAddress(text) {
      document.getElementById('address').value = text;
    }

    send({cmd:'ready'});
  </script>
</body>
</html>"#;

pub const WELCOME_HTML: &str = r#"<!DOCTYPE html>
<html>
<head><meta charset="UTF-8"><title>Offline Browser</title></head>
<body style="font-family:system-ui, sans-serif; margin:2em;">
  <h1>Welcome to the Offline Browser!</h1>
  <p>Click 'Load Offline Site' to browse a downloaded website.</p>
</body>
</html>"#;

/// Script that puts `text` into the toolbar's address field.
pub fn set_address_script(text: &str) -> String {
    let literal = serde_json::to_string(text).unwrap_or_else(|_| String::from("\"\""));
    format!("window.setAddress && setAddress({});", literal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_address_script_escapes_text() {
        assert_eq!(
            set_address_script("it's \"here\"\n</script>"),
            r#"window.setAddress && setAddress("it's \"here\"\n</script>");"#
        );
    }

    #[test]
    fn test_toolbar_commands_parse() {
        use crate::models::Command;

        for cmd in ["back", "forward", "reload", "load_offline_site", "ready"] {
            let body = format!(r#"{{"cmd":"{}"}}"#, cmd);
            assert!(TOOLBAR_HTML.contains(&format!("cmd:'{}'", cmd)));
            assert!(Command::from_ipc(&body).is_ok(), "{} should parse", cmd);
        }
    }
}
