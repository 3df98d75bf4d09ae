use crate::error::Result;
use crate::models::conversion::UnlockInput;
use crate::models::summary::RunSummary;

// Facade 接口，負責協調整批解鎖流程
pub trait UnlockFacadeTrait: Send + Sync {
    /// 執行解鎖，輸入可為單一檔案或目錄
    /// # 參數
    /// - input: 輸入路徑、輸出路徑與覆寫設定
    /// # 回傳
    /// - 單檔模式的錯誤直接返回；目錄模式的單檔錯誤記錄後繼續，只有設定錯誤會返回
    fn execute_unlock(&self, input: UnlockInput) -> Result<RunSummary>;
}
