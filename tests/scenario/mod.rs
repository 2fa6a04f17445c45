mod audience_views;
mod concurrent_versions;
mod legacy_upgrade;
