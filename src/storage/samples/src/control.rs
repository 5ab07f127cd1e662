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

pub mod create_anywhere_cache;
pub mod create_folder;
pub mod get_project_intelligence_config;
pub mod list_folders;
pub mod managed_folder_create;
pub mod rename_folder;
pub mod update_anywhere_cache;
pub mod update_project_intelligence_config;
