//! Profile details editor: names, email and avatar picture.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::Serialize;
use tracing::{debug, info, info_span, warn, Instrument};

use lb_core::ids::UserId;
use lb_core::ports::{AuthPort, BlobStorePort, ImageProbePort, NotifierPort, ProfileRepositoryPort};
use lb_core::profile::{
    avatar_key, check_avatar_dimensions, check_avatar_format, validate_profile_form, AvatarError,
    AvatarUpload, Profile, ProfileError, ProfileForm,
};
use lb_core::Notification;

const UPDATED: &str = "Profile updated successfully!";

#[derive(Debug, Default)]
struct ProfileState {
    form: ProfileForm,
    image_url: Option<String>,
    pending_avatar: Option<AvatarUpload>,
}

/// What the profile page renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileView {
    pub form: ProfileForm,
    pub image_url: Option<String>,
    /// A new picture was chosen but not submitted yet.
    pub avatar_pending: bool,
}

pub struct ProfileEditor {
    auth: Arc<dyn AuthPort>,
    profiles: Arc<dyn ProfileRepositoryPort>,
    blobs: Arc<dyn BlobStorePort>,
    probe: Arc<dyn ImageProbePort>,
    notifier: Arc<dyn NotifierPort>,
    avatar_key_prefix: String,
    state: Mutex<ProfileState>,
}

impl ProfileEditor {
    pub fn new(
        auth: Arc<dyn AuthPort>,
        profiles: Arc<dyn ProfileRepositoryPort>,
        blobs: Arc<dyn BlobStorePort>,
        probe: Arc<dyn ImageProbePort>,
        notifier: Arc<dyn NotifierPort>,
        avatar_key_prefix: impl Into<String>,
    ) -> Self {
        Self {
            auth,
            profiles,
            blobs,
            probe,
            notifier,
            avatar_key_prefix: avatar_key_prefix.into(),
            state: Mutex::new(ProfileState::default()),
        }
    }

    fn state(&self) -> MutexGuard<'_, ProfileState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn owner(&self) -> Result<UserId, ProfileError> {
        self.auth.current_user().ok_or(ProfileError::Unauthenticated)
    }

    /// Fills the form from the stored profile. A user without a profile
    /// document gets an empty form.
    pub async fn load(&self) -> Result<ProfileView, ProfileError> {
        let owner = self.owner()?;
        let span = info_span!("usecase.load_profile.execute", owner = %owner);

        async {
            let profile = match self.profiles.get(&owner).await {
                Ok(profile) => profile.unwrap_or_default(),
                Err(err) => {
                    warn!(error = %err, "failed to load profile");
                    self.notifier
                        .notify(Notification::error(ProfileError::Load.to_string()));
                    return Err(ProfileError::Load);
                }
            };

            let mut state = self.state();
            state.form = ProfileForm::from(&profile);
            state.image_url = profile.image_url;
            state.pending_avatar = None;
            debug!(has_avatar = state.image_url.is_some(), "profile loaded");
            Ok(Self::view_of(&state))
        }
        .instrument(span)
        .await
    }

    /// Accepts a picked picture for the next submit.
    ///
    /// Only PNG and JPEG files below 1024x1024 pixels are accepted.
    pub fn choose_avatar(&self, upload: AvatarUpload) -> Result<(), ProfileError> {
        check_avatar_format(&upload.content_type)?;
        let (width, height) = self
            .probe
            .dimensions(&upload.bytes)
            .map_err(|err| AvatarError::Unreadable(err.to_string()))?;
        check_avatar_dimensions(width, height)?;

        debug!(file = %upload.file_name, width, height, "avatar accepted");
        self.state().pending_avatar = Some(upload);
        Ok(())
    }

    /// Validates and stores the profile, uploading a newly chosen avatar
    /// first. Without a new avatar the previous picture is kept.
    pub async fn submit(&self, form: ProfileForm) -> Result<Profile, ProfileError> {
        let owner = match self.owner() {
            Ok(owner) => owner,
            Err(err) => {
                self.notifier.notify(Notification::error(err.to_string()));
                return Err(err);
            }
        };
        validate_profile_form(&form).map_err(ProfileError::Validation)?;

        let span = info_span!("usecase.update_profile.execute", owner = %owner);
        async {
            let (pending, previous_url) = {
                let state = self.state();
                (state.pending_avatar.clone(), state.image_url.clone())
            };

            let image_url = match pending {
                Some(avatar) => match self.upload_avatar(&owner, &avatar).await {
                    Ok(url) => Some(url),
                    Err(err) => return Err(self.persistence_failed(err)),
                },
                None => previous_url,
            };

            let profile = Profile {
                first_name: form.first_name.clone(),
                last_name: form.last_name.clone(),
                email: form.email.clone(),
                image_url,
            };
            if let Err(err) = self.profiles.put(&owner, &profile).await {
                return Err(self.persistence_failed(err));
            }

            {
                let mut state = self.state();
                state.form = form;
                state.image_url = profile.image_url.clone();
                state.pending_avatar = None;
            }
            info!("profile updated");
            self.notifier.notify(Notification::success(UPDATED));
            Ok(profile)
        }
        .instrument(span)
        .await
    }

    async fn upload_avatar(&self, owner: &UserId, avatar: &AvatarUpload) -> anyhow::Result<String> {
        let key = avatar_key(&self.avatar_key_prefix, owner);
        self.blobs
            .upload(&key, &avatar.bytes, &avatar.content_type)
            .await?;
        let url = self.blobs.resolve_url(&key).await?;
        debug!(key = %key, "avatar uploaded");
        Ok(url)
    }

    fn persistence_failed(&self, err: anyhow::Error) -> ProfileError {
        warn!(error = %err, "failed to update profile");
        self.notifier
            .notify(Notification::error(ProfileError::Persistence.to_string()));
        ProfileError::Persistence
    }

    pub fn view(&self) -> ProfileView {
        Self::view_of(&self.state())
    }

    fn view_of(state: &ProfileState) -> ProfileView {
        ProfileView {
            form: state.form.clone(),
            image_url: state.image_url.clone(),
            avatar_pending: state.pending_avatar.is_some(),
        }
    }
}
