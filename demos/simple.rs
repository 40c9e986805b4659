use log::info;
use rolegate::*;

fn main() -> Result<()> {
    env_logger::init();

    let mut access = AccessControl::new();

    access.create_role("guest")?;
    access.create_role("staff")?;
    access.create_role("marketing")?;
    access.create_admin("admin")?;

    // guest may only view the newsletter
    access.allow("guest", "newsletter", "view")?;

    // staff may view and revise the newsletter
    access.allow("staff", "newsletter", ["view", "edit", "revise"])?;

    // marketing owns the newsletter completely, create_role hands back the existing role
    access.create_role("marketing")?.allow_all("newsletter")?;

    // staff is no longer allowed to revise
    access.deny("staff", "newsletter", "revise")?;

    for role in access.iter() {
        for permission in &["view", "edit", "revise", "publish"] {
            info!("{} {} newsletter: {}",
                role.id(), permission, access.check_permission(role.id(), "newsletter", *permission)?);
        } // for
    } // for

    Ok(())
} // main
