// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The HTTP-JSON transport for [StorageControl][crate::client::StorageControl].
//!
//! Only the intelligence config RPCs are available over HTTP and JSON.

use crate::Result;
use crate::info;
use crate::model::IntelligenceConfig;
use crate::name::{IntelligenceConfigName, ResourceNameError};
use gax::response::Response;
use gaxi::http::NoBody;
use gaxi::query_parameter::QueryParameter;

#[derive(Clone, Copy, Debug, PartialEq)]
enum Parent {
    Project,
    Folder,
    Organization,
}

impl Parent {
    fn template(self) -> &'static str {
        match self {
            Self::Project => IntelligenceConfigName::PROJECT_TEMPLATE,
            Self::Folder => IntelligenceConfigName::FOLDER_TEMPLATE,
            Self::Organization => IntelligenceConfigName::ORGANIZATION_TEMPLATE,
        }
    }

    /// Returns `name` if it is an intelligence config name for this parent.
    fn check(self, name: &str) -> Result<&str> {
        let matches = match IntelligenceConfigName::parse(name) {
            Ok(IntelligenceConfigName::Project { .. }) => self == Self::Project,
            Ok(IntelligenceConfigName::Folder { .. }) => self == Self::Folder,
            Ok(IntelligenceConfigName::Organization { .. }) => self == Self::Organization,
            _ => false,
        };
        if !matches {
            return Err(gax::error::Error::binding(ResourceNameError::invalid(
                name,
                self.template(),
            )));
        }
        Ok(name)
    }
}

fn not_available(rpc: &str) -> gax::error::Error {
    gax::error::Error::other(format!(
        "{rpc} is not available over HTTP-JSON, use StorageControl::builder() to create a gRPC client"
    ))
}

/// Implements [StorageControl](crate::stub::StorageControl) using a
/// [gaxi::http::ReqwestClient].
#[derive(Clone)]
pub struct StorageControl {
    inner: gaxi::http::ReqwestClient,
}

impl std::fmt::Debug for StorageControl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        f.debug_struct("StorageControl")
            .field("inner", &self.inner)
            .finish()
    }
}

impl StorageControl {
    pub async fn new(config: gaxi::options::ClientConfig) -> gax::client_builder::Result<Self> {
        let inner = gaxi::http::ReqwestClient::new(config, super::DEFAULT_HOST).await?;
        Ok(Self { inner })
    }

    async fn get_config(
        &self,
        parent: Parent,
        name: &str,
        options: gax::options::RequestOptions,
    ) -> Result<Response<IntelligenceConfig>> {
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/v2/{}", parent.check(name)?);
        let builder = self
            .inner
            .builder(reqwest::Method::GET, path)
            .header(
                "x-goog-api-client",
                reqwest::header::HeaderValue::from_static(&info::X_GOOG_API_CLIENT_REST_HEADER),
            );
        self.inner
            .execute(builder, None::<NoBody>, options)
            .await
    }

    async fn update_config(
        &self,
        parent: Parent,
        config: Option<IntelligenceConfig>,
        update_mask: Option<wkt::FieldMask>,
        mut request_id: String,
        options: gax::options::RequestOptions,
    ) -> Result<Response<IntelligenceConfig>> {
        gaxi::request_id::populate(&mut request_id);
        let options = gax::options::internal::set_default_idempotency(options, true);
        let config = config.ok_or_else(|| gaxi::path_parameter::missing("intelligence_config"))?;
        let path = format!("/v2/{}", parent.check(&config.name)?);
        let builder = self
            .inner
            .builder(reqwest::Method::PATCH, path)
            .header(
                "x-goog-api-client",
                reqwest::header::HeaderValue::from_static(&info::X_GOOG_API_CLIENT_REST_HEADER),
            );
        let builder = update_mask.add(builder, "updateMask");
        let builder = serde_json::Value::String(request_id).add(builder, "requestId");
        self.inner.execute(builder, Some(config), options).await
    }
}

impl crate::stub::StorageControl for StorageControl {
    async fn get_project_intelligence_config(
        &self,
        req: crate::model::GetProjectIntelligenceConfigRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<IntelligenceConfig>> {
        self.get_config(Parent::Project, &req.name, options).await
    }

    async fn update_project_intelligence_config(
        &self,
        req: crate::model::UpdateProjectIntelligenceConfigRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<IntelligenceConfig>> {
        self.update_config(
            Parent::Project,
            req.intelligence_config,
            req.update_mask,
            req.request_id,
            options,
        )
        .await
    }

    async fn get_folder_intelligence_config(
        &self,
        req: crate::model::GetFolderIntelligenceConfigRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<IntelligenceConfig>> {
        self.get_config(Parent::Folder, &req.name, options).await
    }

    async fn update_folder_intelligence_config(
        &self,
        req: crate::model::UpdateFolderIntelligenceConfigRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<IntelligenceConfig>> {
        self.update_config(
            Parent::Folder,
            req.intelligence_config,
            req.update_mask,
            req.request_id,
            options,
        )
        .await
    }

    async fn get_organization_intelligence_config(
        &self,
        req: crate::model::GetOrganizationIntelligenceConfigRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<IntelligenceConfig>> {
        self.get_config(Parent::Organization, &req.name, options).await
    }

    async fn update_organization_intelligence_config(
        &self,
        req: crate::model::UpdateOrganizationIntelligenceConfigRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<IntelligenceConfig>> {
        self.update_config(
            Parent::Organization,
            req.intelligence_config,
            req.update_mask,
            req.request_id,
            options,
        )
        .await
    }

    async fn create_folder(
        &self,
        _req: crate::model::CreateFolderRequest,
        _options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::Folder>> {
        Err(not_available("CreateFolder"))
    }

    async fn delete_folder(
        &self,
        _req: crate::model::DeleteFolderRequest,
        _options: gax::options::RequestOptions,
    ) -> Result<Response<()>> {
        Err(not_available("DeleteFolder"))
    }

    async fn delete_folder_recursive(
        &self,
        _req: crate::model::DeleteFolderRecursiveRequest,
        _options: gax::options::RequestOptions,
    ) -> Result<Response<lro::model::Operation>> {
        Err(not_available("DeleteFolderRecursive"))
    }

    async fn get_folder(
        &self,
        _req: crate::model::GetFolderRequest,
        _options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::Folder>> {
        Err(not_available("GetFolder"))
    }

    async fn list_folders(
        &self,
        _req: crate::model::ListFoldersRequest,
        _options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::ListFoldersResponse>> {
        Err(not_available("ListFolders"))
    }

    async fn rename_folder(
        &self,
        _req: crate::model::RenameFolderRequest,
        _options: gax::options::RequestOptions,
    ) -> Result<Response<lro::model::Operation>> {
        Err(not_available("RenameFolder"))
    }

    async fn get_storage_layout(
        &self,
        _req: crate::model::GetStorageLayoutRequest,
        _options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::StorageLayout>> {
        Err(not_available("GetStorageLayout"))
    }

    async fn create_managed_folder(
        &self,
        _req: crate::model::CreateManagedFolderRequest,
        _options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::ManagedFolder>> {
        Err(not_available("CreateManagedFolder"))
    }

    async fn delete_managed_folder(
        &self,
        _req: crate::model::DeleteManagedFolderRequest,
        _options: gax::options::RequestOptions,
    ) -> Result<Response<()>> {
        Err(not_available("DeleteManagedFolder"))
    }

    async fn get_managed_folder(
        &self,
        _req: crate::model::GetManagedFolderRequest,
        _options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::ManagedFolder>> {
        Err(not_available("GetManagedFolder"))
    }

    async fn list_managed_folders(
        &self,
        _req: crate::model::ListManagedFoldersRequest,
        _options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::ListManagedFoldersResponse>> {
        Err(not_available("ListManagedFolders"))
    }

    async fn create_anywhere_cache(
        &self,
        _req: crate::model::CreateAnywhereCacheRequest,
        _options: gax::options::RequestOptions,
    ) -> Result<Response<lro::model::Operation>> {
        Err(not_available("CreateAnywhereCache"))
    }

    async fn update_anywhere_cache(
        &self,
        _req: crate::model::UpdateAnywhereCacheRequest,
        _options: gax::options::RequestOptions,
    ) -> Result<Response<lro::model::Operation>> {
        Err(not_available("UpdateAnywhereCache"))
    }

    async fn disable_anywhere_cache(
        &self,
        _req: crate::model::DisableAnywhereCacheRequest,
        _options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::AnywhereCache>> {
        Err(not_available("DisableAnywhereCache"))
    }

    async fn pause_anywhere_cache(
        &self,
        _req: crate::model::PauseAnywhereCacheRequest,
        _options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::AnywhereCache>> {
        Err(not_available("PauseAnywhereCache"))
    }

    async fn resume_anywhere_cache(
        &self,
        _req: crate::model::ResumeAnywhereCacheRequest,
        _options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::AnywhereCache>> {
        Err(not_available("ResumeAnywhereCache"))
    }

    async fn get_anywhere_cache(
        &self,
        _req: crate::model::GetAnywhereCacheRequest,
        _options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::AnywhereCache>> {
        Err(not_available("GetAnywhereCache"))
    }

    async fn list_anywhere_caches(
        &self,
        _req: crate::model::ListAnywhereCachesRequest,
        _options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::ListAnywhereCachesResponse>> {
        Err(not_available("ListAnywhereCaches"))
    }

    async fn get_iam_policy(
        &self,
        _req: crate::model::GetIamPolicyRequest,
        _options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::Policy>> {
        Err(not_available("GetIamPolicy"))
    }

    async fn set_iam_policy(
        &self,
        _req: crate::model::SetIamPolicyRequest,
        _options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::Policy>> {
        Err(not_available("SetIamPolicy"))
    }

    async fn test_iam_permissions(
        &self,
        _req: crate::model::TestIamPermissionsRequest,
        _options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::TestIamPermissionsResponse>> {
        Err(not_available("TestIamPermissions"))
    }

    async fn get_operation(
        &self,
        _req: lro::model::GetOperationRequest,
        _options: gax::options::RequestOptions,
    ) -> Result<Response<lro::model::Operation>> {
        Err(not_available("GetOperation"))
    }

    fn get_polling_error_policy(
        &self,
        options: &gax::options::RequestOptions,
    ) -> std::sync::Arc<dyn gax::polling_error_policy::PollingErrorPolicy> {
        self.inner.get_polling_error_policy(options)
    }

    fn get_polling_backoff_policy(
        &self,
        options: &gax::options::RequestOptions,
    ) -> std::sync::Arc<dyn gax::polling_backoff_policy::PollingBackoffPolicy> {
        self.inner.get_polling_backoff_policy(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(Parent::Project, "projects/p/locations/global/intelligenceConfig")]
    #[test_case(Parent::Folder, "folders/123/locations/global/intelligenceConfig")]
    #[test_case(Parent::Organization, "organizations/456/locations/global/intelligenceConfig")]
    fn check_matches(parent: Parent, name: &str) -> anyhow::Result<()> {
        assert_eq!(parent.check(name)?, name);
        Ok(())
    }

    #[test_case(Parent::Project, "folders/123/locations/global/intelligenceConfig")]
    #[test_case(Parent::Folder, "projects/p/locations/global/intelligenceConfig")]
    #[test_case(Parent::Organization, "")]
    #[test_case(Parent::Project, "projects/p/buckets/b")]
    fn check_mismatch(parent: Parent, name: &str) {
        let err = parent.check(name).unwrap_err();
        assert!(err.is_binding(), "{err:?}");
        assert!(format!("{err}").contains(parent.template()), "{err}");
    }

    #[test]
    fn unavailable() {
        let err = not_available("CreateFolder");
        assert!(format!("{err}").contains("CreateFolder"), "{err}");
    }
}
