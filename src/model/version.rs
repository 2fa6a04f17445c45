use crate::model::db::{
    VersionItemModel, VersionModel, VersionSectionModel, VersionViewItemSettingModel,
    VersionViewModel, VersionViewSectionSettingModel,
};

/// Every row captured by a version, ordered the way the live estimate was ordered.
#[derive(Clone, Debug, PartialEq)]
pub struct VersionSnapshot {
    /// Version header.
    pub version: VersionModel,
    /// Copied sections.
    pub sections: Vec<VersionSectionModel>,
    /// Copied items.
    pub items: Vec<VersionItemModel>,
    /// Copied views.
    pub views: Vec<VersionViewModel>,
    /// Copied section settings of every copied view.
    pub section_settings: Vec<VersionViewSectionSettingModel>,
    /// Copied item settings of every copied view.
    pub item_settings: Vec<VersionViewItemSettingModel>,
}
