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

use gaxi::prost::{ConvertError, FromProto, ToProto};

impl ToProto<crate::google::iam::v1::GetIamPolicyRequest> for crate::model::GetIamPolicyRequest {
    fn to_proto(self) -> std::result::Result<crate::google::iam::v1::GetIamPolicyRequest, ConvertError> {
        Ok(crate::google::iam::v1::GetIamPolicyRequest {
            resource: self.resource.to_proto()?,
            options: self.options.to_proto()?,
        })
    }
}

impl FromProto<crate::model::GetIamPolicyRequest> for crate::google::iam::v1::GetIamPolicyRequest {
    fn cnv(self) -> std::result::Result<crate::model::GetIamPolicyRequest, ConvertError> {
        Ok(crate::model::GetIamPolicyRequest {
            resource: self.resource.cnv()?,
            options: self.options.cnv()?,
        })
    }
}

impl ToProto<crate::google::iam::v1::GetPolicyOptions> for crate::model::GetPolicyOptions {
    fn to_proto(self) -> std::result::Result<crate::google::iam::v1::GetPolicyOptions, ConvertError> {
        Ok(crate::google::iam::v1::GetPolicyOptions {
            requested_policy_version: self.requested_policy_version.to_proto()?,
        })
    }
}

impl FromProto<crate::model::GetPolicyOptions> for crate::google::iam::v1::GetPolicyOptions {
    fn cnv(self) -> std::result::Result<crate::model::GetPolicyOptions, ConvertError> {
        Ok(crate::model::GetPolicyOptions {
            requested_policy_version: self.requested_policy_version.cnv()?,
        })
    }
}

impl ToProto<crate::google::iam::v1::SetIamPolicyRequest> for crate::model::SetIamPolicyRequest {
    fn to_proto(self) -> std::result::Result<crate::google::iam::v1::SetIamPolicyRequest, ConvertError> {
        Ok(crate::google::iam::v1::SetIamPolicyRequest {
            resource: self.resource.to_proto()?,
            policy: self.policy.to_proto()?,
            update_mask: self.update_mask.to_proto()?,
        })
    }
}

impl FromProto<crate::model::SetIamPolicyRequest> for crate::google::iam::v1::SetIamPolicyRequest {
    fn cnv(self) -> std::result::Result<crate::model::SetIamPolicyRequest, ConvertError> {
        Ok(crate::model::SetIamPolicyRequest {
            resource: self.resource.cnv()?,
            policy: self.policy.cnv()?,
            update_mask: self.update_mask.cnv()?,
        })
    }
}

impl ToProto<crate::google::iam::v1::Policy> for crate::model::Policy {
    fn to_proto(self) -> std::result::Result<crate::google::iam::v1::Policy, ConvertError> {
        Ok(crate::google::iam::v1::Policy {
            version: self.version.to_proto()?,
            bindings: self.bindings.to_proto()?,
            etag: self.etag.to_proto()?,
        })
    }
}

impl FromProto<crate::model::Policy> for crate::google::iam::v1::Policy {
    fn cnv(self) -> std::result::Result<crate::model::Policy, ConvertError> {
        Ok(crate::model::Policy {
            version: self.version.cnv()?,
            bindings: self.bindings.cnv()?,
            etag: self.etag.cnv()?,
        })
    }
}

impl ToProto<crate::google::iam::v1::Binding> for crate::model::Binding {
    fn to_proto(self) -> std::result::Result<crate::google::iam::v1::Binding, ConvertError> {
        Ok(crate::google::iam::v1::Binding {
            role: self.role.to_proto()?,
            members: self.members.to_proto()?,
            condition: self.condition.to_proto()?,
        })
    }
}

impl FromProto<crate::model::Binding> for crate::google::iam::v1::Binding {
    fn cnv(self) -> std::result::Result<crate::model::Binding, ConvertError> {
        Ok(crate::model::Binding {
            role: self.role.cnv()?,
            members: self.members.cnv()?,
            condition: self.condition.cnv()?,
        })
    }
}

impl ToProto<crate::google::iam::v1::TestIamPermissionsRequest> for crate::model::TestIamPermissionsRequest {
    fn to_proto(self) -> std::result::Result<crate::google::iam::v1::TestIamPermissionsRequest, ConvertError> {
        Ok(crate::google::iam::v1::TestIamPermissionsRequest {
            resource: self.resource.to_proto()?,
            permissions: self.permissions.to_proto()?,
        })
    }
}

impl FromProto<crate::model::TestIamPermissionsRequest> for crate::google::iam::v1::TestIamPermissionsRequest {
    fn cnv(self) -> std::result::Result<crate::model::TestIamPermissionsRequest, ConvertError> {
        Ok(crate::model::TestIamPermissionsRequest {
            resource: self.resource.cnv()?,
            permissions: self.permissions.cnv()?,
        })
    }
}

impl ToProto<crate::google::iam::v1::TestIamPermissionsResponse> for crate::model::TestIamPermissionsResponse {
    fn to_proto(self) -> std::result::Result<crate::google::iam::v1::TestIamPermissionsResponse, ConvertError> {
        Ok(crate::google::iam::v1::TestIamPermissionsResponse {
            permissions: self.permissions.to_proto()?,
        })
    }
}

impl FromProto<crate::model::TestIamPermissionsResponse> for crate::google::iam::v1::TestIamPermissionsResponse {
    fn cnv(self) -> std::result::Result<crate::model::TestIamPermissionsResponse, ConvertError> {
        Ok(crate::model::TestIamPermissionsResponse {
            permissions: self.permissions.cnv()?,
        })
    }
}

impl ToProto<crate::google::r#type::Expr> for crate::model::Expr {
    fn to_proto(self) -> std::result::Result<crate::google::r#type::Expr, ConvertError> {
        Ok(crate::google::r#type::Expr {
            expression: self.expression.to_proto()?,
            title: self.title.to_proto()?,
            description: self.description.to_proto()?,
            location: self.location.to_proto()?,
        })
    }
}

impl FromProto<crate::model::Expr> for crate::google::r#type::Expr {
    fn cnv(self) -> std::result::Result<crate::model::Expr, ConvertError> {
        Ok(crate::model::Expr {
            expression: self.expression.cnv()?,
            title: self.title.cnv()?,
            description: self.description.cnv()?,
            location: self.location.cnv()?,
        })
    }
}
