use ppe_api::EntryApi;
use ppe_store::ConfigProvider;

pub async fn run(project_name: Option<&str>, api: EntryApi) -> anyhow::Result<()> {
    let mut provider = ConfigProvider::new(api);
    provider.load().await?;

    if let Some(project_name) = project_name {
        provider.set_project_name(project_name).await?;
        println!("project name set to {project_name}");
        return Ok(());
    }

    if let Some(config) = provider.config() {
        println!("project name: {}", config.project_name);
        println!("company units: {}", config.company_units.join(", "));
        if !provider.is_configured() {
            println!("(defaults; no configuration record stored yet)");
        }
    }
    Ok(())
}
