use anyhow::bail;

use ppe_config::AuthConfig;
use ppe_store::Session;

pub fn run(username: &str, password: &str, auth: &AuthConfig) -> anyhow::Result<()> {
    let mut session = Session::new(auth);
    if !session.login(username, password) {
        bail!("invalid credentials");
    }
    println!("login ok");
    Ok(())
}
